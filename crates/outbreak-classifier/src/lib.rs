//! outbreak-classifier
//!
//! Loads the three pre-trained classifiers from disk and dispatches
//! completed input vectors to them. Classifiers are opaque: the only thing
//! this crate asks of one is a binary label for a fixed-length vector.

pub mod artifact;
pub mod dispatch;
pub mod error;
pub mod registry;

use outbreak_core::Label;

use error::ClassifierError;

pub use dispatch::Predictor;
pub use registry::ModelRegistry;

/// A pre-trained binary decision function.
///
/// Implementations are read-only after construction and may be shared
/// across any number of concurrent sessions.
pub trait Classifier: Send + Sync {
    /// Length of the feature vector this classifier was trained on.
    fn n_features(&self) -> usize;

    /// Classify a single feature vector.
    fn predict(&self, features: &[f64]) -> Result<Label, ClassifierError>;
}
