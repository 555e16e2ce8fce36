use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A single numeric entry point on a prediction page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub id: String,
    pub label: String,
    /// Lowest accepted value, if the field has one. There is never an upper bound.
    pub min: Option<f64>,
    pub step: Option<f64>,
    /// Number of decimals the entry point displays.
    pub precision: u8,
}

impl Field {
    /// Whether `value` may be entered into this field.
    pub fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.min.is_none_or(|min| value >= min)
    }
}

/// The ordered list of fields a domain's classifier was trained on.
///
/// Order is significant: position `i` of every input vector for the domain
/// is fed to feature `i` of the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSchema {
    fields: Vec<Field>,
}

impl FieldSchema {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.id.as_str())
    }
}

pub(crate) fn diabetes() -> &'static FieldSchema {
    static SCHEMA: LazyLock<FieldSchema> = LazyLock::new(|| {
        let field = |id: &str, label: &str| Field {
            id: id.to_string(),
            label: label.to_string(),
            min: Some(0.0),
            step: Some(0.001),
            precision: 3,
        };

        FieldSchema {
            fields: vec![
                field("pregnancies", "Number of Pregnancies"),
                field("glucose", "Glucose Level"),
                field("blood_pressure", "Blood Pressure value"),
                field("skin_thickness", "Skin Thickness value"),
                field("insulin", "Insulin Level"),
                field("bmi", "BMI value"),
                field("diabetes_pedigree_function", "Diabetes Pedigree Function value"),
                field("age", "Age of the Person"),
            ],
        }
    });
    &SCHEMA
}

pub(crate) fn heart_disease() -> &'static FieldSchema {
    static SCHEMA: LazyLock<FieldSchema> = LazyLock::new(|| {
        let field = |id: &str, label: &str| Field {
            id: id.to_string(),
            label: label.to_string(),
            min: None,
            step: None,
            precision: 3,
        };

        FieldSchema {
            fields: vec![
                field("age", "Age"),
                field("sex", "Sex"),
                field("cp", "Chest Pain types"),
                field("trestbps", "Resting Blood Pressure"),
                field("chol", "Serum Cholestoral in mg/dl"),
                field("fbs", "Fasting Blood Sugar > 120 mg/dl"),
                field("restecg", "Resting Electrocardiographic results"),
                field("thalach", "Maximum Heart Rate achieved"),
                field("exang", "Exercise Induced Angina"),
                field("oldpeak", "ST depression induced by exercise"),
                field("slope", "Slope of the peak exercise ST segment"),
                field("ca", "Major vessels colored by fluoroscopy"),
                field("thal", "Thal: normal; 1 fixed defect; 2 reversible defect"),
            ],
        }
    });
    &SCHEMA
}

pub(crate) fn parkinsons() -> &'static FieldSchema {
    static SCHEMA: LazyLock<FieldSchema> = LazyLock::new(|| {
        // Voice measures come at three display resolutions.
        let field = |id: &str, label: &str, step: f64, precision: u8| Field {
            id: id.to_string(),
            label: label.to_string(),
            min: None,
            step: Some(step),
            precision,
        };
        let coarse = |id: &str, label: &str| field(id, label, 0.001, 3);
        let fine = |id: &str, label: &str| field(id, label, 0.00001, 5);
        let finest = |id: &str, label: &str| field(id, label, 0.000001, 6);

        FieldSchema {
            fields: vec![
                coarse("fo", "Fo"),
                coarse("fhi", "Fhi"),
                coarse("flo", "Flo"),
                fine("jitter_percent", "Jitter Percent"),
                fine("jitter_abs", "Jitter Abs"),
                fine("rap", "RAP"),
                fine("ppq", "PPQ"),
                fine("ddp", "DDP"),
                fine("shimmer", "Shimmer"),
                coarse("shimmer_db", "Shimmer_dB"),
                fine("apq3", "APQ3"),
                fine("apq5", "APQ5"),
                fine("apq", "APQ"),
                fine("dda", "DDA"),
                field("nhr", "NHR", 0.000001, 5),
                coarse("hnr", "HNR"),
                finest("rpde", "RPDE"),
                finest("dfa", "DFA"),
                finest("spread1", "Spread1"),
                finest("spread2", "Spread2"),
                finest("d2", "D2"),
                finest("ppe", "PPE"),
            ],
        }
    });
    &SCHEMA
}
