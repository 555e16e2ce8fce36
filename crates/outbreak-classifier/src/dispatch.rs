use std::sync::Arc;

use outbreak_core::{CoreError, Diagnosis, Domain, InputVector, Label};

use crate::error::{ClassifierError, SubmitError};
use crate::registry::ModelRegistry;

/// Stateless submission handler over a shared, read-only registry.
#[derive(Debug, Clone)]
pub struct Predictor {
    registry: Arc<ModelRegistry>,
}

impl Predictor {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Feed a dense vector to the domain's classifier.
    ///
    /// No scaling or reordering happens here; `features` must already be in
    /// the domain's schema order.
    pub fn predict(&self, domain: Domain, features: &[f64]) -> Result<Label, ClassifierError> {
        let label = self.registry.get(domain).predict(features)?;
        tracing::debug!(domain = %domain, label = u8::from(label), "prediction");
        Ok(label)
    }

    /// Run one page submission: completeness gate, then a single prediction,
    /// then the domain's diagnosis sentence.
    ///
    /// The classifier is never called when the gate fails.
    pub fn submit(&self, input: &InputVector) -> Result<Diagnosis, SubmitError> {
        let domain = input.domain();
        let features = input.complete().map_err(|e| match e {
            CoreError::IncompleteInput { missing } => {
                tracing::debug!(domain = %domain, missing = missing.len(), "incomplete submission");
                SubmitError::Incomplete { missing }
            }
            other => SubmitError::Input(other),
        })?;

        let label = self.predict(domain, &features)?;
        Ok(Diagnosis::new(domain, label))
    }
}
