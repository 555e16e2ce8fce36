//! Completeness gate: the only check run before a prediction is attempted.

/// Message shown when a submission is missing one or more values.
pub const INCOMPLETE_INPUT_MESSAGE: &str = "Please fill in all fields before proceeding!";

/// Returns `true` (block the submission) if any value is absent.
///
/// Presence is the only thing checked here. Values are not range- or
/// semantics-checked, so a negative age or a `sex` of 7 passes.
pub fn is_incomplete(values: &[Option<f64>]) -> bool {
    values.iter().any(Option::is_none)
}
