use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::schema::{self, FieldSchema};

/// One of the three independent prediction contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Domain {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Domain {
    /// Navigation order of the prediction pages.
    pub const ALL: [Domain; 3] = [Domain::Diabetes, Domain::HeartDisease, Domain::Parkinsons];

    pub fn id(self) -> &'static str {
        match self {
            Domain::Diabetes => "diabetes",
            Domain::HeartDisease => "heart_disease",
            Domain::Parkinsons => "parkinsons",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Prediction",
            Domain::HeartDisease => "Heart Disease Prediction",
            Domain::Parkinsons => "Parkinsons Prediction",
        }
    }

    /// Heading shown at the top of the prediction page.
    pub fn heading(self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Prediction using ML",
            Domain::HeartDisease => "Heart Disease Prediction using ML",
            Domain::Parkinsons => "Parkinson's Disease Prediction using ML",
        }
    }

    /// Caption of the page's submit action.
    pub fn submit_label(self) -> &'static str {
        match self {
            Domain::Diabetes => "Diabetes Test Result",
            Domain::HeartDisease => "Heart Disease Test Result",
            Domain::Parkinsons => "Parkinson's Test Result",
        }
    }

    /// File name of the serialized classifier for this domain.
    pub fn model_file(self) -> &'static str {
        match self {
            Domain::Diabetes => "diabetes_model.sav",
            Domain::HeartDisease => "heart_model.sav",
            Domain::Parkinsons => "parkinsons_model.sav",
        }
    }

    pub fn schema(self) -> &'static FieldSchema {
        match self {
            Domain::Diabetes => schema::diabetes(),
            Domain::HeartDisease => schema::heart_disease(),
            Domain::Parkinsons => schema::parkinsons(),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| CoreError::UnknownDomain(s.to_string()))
    }
}
