use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("unknown field '{field_id}' for domain '{domain_id}'")]
    UnknownField { domain_id: String, field_id: String },

    #[error("{domain_id} expects {expected} values, got {actual}")]
    LengthMismatch {
        domain_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: {value} is not an accepted value (minimum {min})")]
    OutOfRange { field: String, value: f64, min: f64 },

    #[error("{field}: value is not a finite number")]
    NotANumber { field: String },

    #[error("{}", crate::gate::INCOMPLETE_INPUT_MESSAGE)]
    IncompleteInput { missing: Vec<String> },

    #[error("classifier produced a non-binary label: {0}")]
    InvalidLabel(f64),
}
