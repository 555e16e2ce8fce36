use std::fmt;
use std::path::Path;
use std::sync::Arc;

use outbreak_core::Domain;

use crate::artifact::load_classifier;
use crate::error::ClassifierError;
use crate::Classifier;

/// The three loaded classifiers, one per domain.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct ModelRegistry {
    diabetes: Arc<dyn Classifier>,
    heart_disease: Arc<dyn Classifier>,
    parkinsons: Arc<dyn Classifier>,
}

impl ModelRegistry {
    /// Load every domain's classifier from its fixed file name under `dir`.
    pub fn load(dir: &Path) -> Result<Self, ClassifierError> {
        let load = |domain: Domain| -> Result<Arc<dyn Classifier>, ClassifierError> {
            let path = dir.join(domain.model_file());
            let classifier = load_classifier(&path)?;
            tracing::info!(
                domain = %domain,
                path = %path.display(),
                n_features = classifier.n_features(),
                "loaded classifier"
            );
            Ok(classifier)
        };

        Self::from_classifiers(
            load(Domain::Diabetes)?,
            load(Domain::HeartDisease)?,
            load(Domain::Parkinsons)?,
        )
    }

    /// Assemble a registry from already-constructed classifiers.
    ///
    /// Each classifier must accept exactly as many features as its domain's
    /// field schema defines.
    pub fn from_classifiers(
        diabetes: Arc<dyn Classifier>,
        heart_disease: Arc<dyn Classifier>,
        parkinsons: Arc<dyn Classifier>,
    ) -> Result<Self, ClassifierError> {
        let registry = Self {
            diabetes,
            heart_disease,
            parkinsons,
        };

        for domain in Domain::ALL {
            let expected = registry.get(domain).n_features();
            let actual = domain.schema().len();
            if expected != actual {
                return Err(ClassifierError::SchemaMismatch {
                    domain_id: domain.id().to_string(),
                    expected,
                    actual,
                });
            }
        }

        Ok(registry)
    }

    pub fn get(&self, domain: Domain) -> &dyn Classifier {
        match domain {
            Domain::Diabetes => self.diabetes.as_ref(),
            Domain::HeartDisease => self.heart_disease.as_ref(),
            Domain::Parkinsons => self.parkinsons.as_ref(),
        }
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("diabetes", &self.diabetes.n_features())
            .field("heart_disease", &self.heart_disease.n_features())
            .field("parkinsons", &self.parkinsons.n_features())
            .finish()
    }
}
