//! On-disk classifier artifacts.
//!
//! Each `.sav` file holds one JSON document tagged by `kind`:
//!
//! ```json
//! { "kind": "linear", "coefficients": [0.1, 0.03], "intercept": -4.2 }
//! ```
//!
//! ```json
//! {
//!   "kind": "decision_tree",
//!   "n_features": 2,
//!   "nodes": [
//!     { "feature": 1, "threshold": 127.5, "left": 1, "right": 2 },
//!     { "leaf": 0 },
//!     { "leaf": 1 }
//!   ]
//! }
//! ```
//!
//! A linear artifact labels a vector positive when its decision function
//! `w·x + b` is strictly greater than zero. This covers the exported
//! decision functions of linear SVMs and logistic regressions alike.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use outbreak_core::Label;

use crate::error::ClassifierError;
use crate::Classifier;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    DecisionTree(DecisionTree),
}

impl ModelArtifact {
    /// Structural checks that serde cannot express.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Linear(model) => model.validate(),
            ModelArtifact::DecisionTree(tree) => tree.validate(),
        }
    }

    /// Validate the artifact and turn it into a shareable classifier.
    pub fn into_classifier(self) -> Result<Arc<dyn Classifier>, String> {
        self.validate()?;
        Ok(match self {
            ModelArtifact::Linear(model) => Arc::new(model),
            ModelArtifact::DecisionTree(tree) => Arc::new(tree),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    fn validate(&self) -> Result<(), String> {
        if self.coefficients.is_empty() {
            return Err("linear model has no coefficients".to_string());
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|w| !w.is_finite()) {
            return Err("linear model has non-finite weights".to_string());
        }
        Ok(())
    }
}

impl Classifier for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        check_shape(self.n_features(), features)?;
        let score: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        if !score.is_finite() {
            return Err(ClassifierError::NonFiniteScore);
        }
        Ok(Label::from(score > 0.0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        leaf: u8,
    },
}

/// A binary decision tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub n_features: usize,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("decision tree has no nodes".to_string());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= self.n_features {
                        return Err(format!(
                            "node {index} splits on feature {feature} of {}",
                            self.n_features
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {index} has a non-finite threshold"));
                    }
                    // Children must come after their parent, so every walk terminates.
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(format!("node {index} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { leaf } => {
                    if leaf > 1 {
                        return Err(format!("leaf {index} has non-binary label {leaf}"));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for DecisionTree {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ClassifierError> {
        check_shape(self.n_features, features)?;
        // A hand-built tree may be unvalidated, so every step is bounds-checked.
        let mut index = 0;
        for _ in 0..self.nodes.len() {
            let node = self
                .nodes
                .get(index)
                .ok_or(ClassifierError::CorruptTree { node: index })?;
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features
                        .get(feature)
                        .ok_or(ClassifierError::CorruptTree { node: index })?;
                    index = if *value <= threshold { left } else { right };
                }
                TreeNode::Leaf { leaf } => return Ok(Label::try_from(leaf)?),
            }
        }
        Err(ClassifierError::CorruptTree { node: index })
    }
}

fn check_shape(expected: usize, features: &[f64]) -> Result<(), ClassifierError> {
    if features.len() != expected {
        return Err(ClassifierError::ShapeMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

/// Read and validate a single classifier artifact.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ClassifierError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ClassifierError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ClassifierError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let artifact: ModelArtifact =
        serde_json::from_slice(&bytes).map_err(|source| ClassifierError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    artifact
        .into_classifier()
        .map_err(|reason| ClassifierError::InvalidModel {
            path: path.to_path_buf(),
            reason,
        })
}
