use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::domain::Domain;
use crate::error::CoreError;

/// Binary classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Negative = 0,
    Positive = 1,
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label as u8
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive { Label::Positive } else { Label::Negative }
    }
}

impl TryFrom<u8> for Label {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Label::try_from(f64::from(value))
    }
}

impl TryFrom<i64> for Label {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Negative),
            1 => Ok(Label::Positive),
            other => Err(CoreError::InvalidLabel(other as f64)),
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.0 {
            Ok(Label::Negative)
        } else if value == 1.0 {
            Ok(Label::Positive)
        } else {
            Err(CoreError::InvalidLabel(value))
        }
    }
}

/// The fixed sentence shown for a domain's label.
pub fn render(domain: Domain, label: Label) -> &'static str {
    match (domain, label) {
        (Domain::Diabetes, Label::Positive) => "The person is diabetic",
        (Domain::Diabetes, Label::Negative) => "The person is not diabetic",
        (Domain::HeartDisease, Label::Positive) => "The person is having heart disease",
        (Domain::HeartDisease, Label::Negative) => "The person does not have any heart disease",
        (Domain::Parkinsons, Label::Positive) => "The person has Parkinson's disease",
        (Domain::Parkinsons, Label::Negative) => "The person does not have Parkinson's disease",
    }
}

/// A rendered prediction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Diagnosis {
    pub domain: Domain,
    #[ts(type = "0 | 1")]
    pub label: Label,
    pub message: String,
}

impl Diagnosis {
    pub fn new(domain: Domain, label: Label) -> Self {
        Self {
            domain,
            label,
            message: render(domain, label).to_string(),
        }
    }
}
