use std::path::PathBuf;

use thiserror::Error;

use outbreak_core::CoreError;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model file not found: {}", path.display())]
    ModelNotFound { path: PathBuf },

    #[error("failed to read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model in {}: {reason}", path.display())]
    InvalidModel { path: PathBuf, reason: String },

    #[error("{domain_id} classifier expects {expected} features but the field schema has {actual}")]
    SchemaMismatch {
        domain_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("classifier expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("decision tree walk failed at node {node}")]
    CorruptTree { node: usize },

    #[error("linear decision function is not finite")]
    NonFiniteScore,

    #[error("invalid classifier output: {0}")]
    Output(#[from] CoreError),
}

/// Failure of a single page submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{}", outbreak_core::gate::INCOMPLETE_INPUT_MESSAGE)]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Input(CoreError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
