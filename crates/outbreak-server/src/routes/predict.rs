use std::collections::BTreeMap;
use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use outbreak_core::{CoreError, Domain, InputVector, Label};

use crate::error::ApiError;
use crate::state::AppState;

/// One form entry: a number, or `null` / `""` when the field was left blank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValue(pub Option<f64>);

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldValueVisitor;

        impl<'de> Visitor<'de> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, null, or an empty string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
                Ok(FieldValue(Some(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
                Ok(FieldValue(Some(v as f64)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
                Ok(FieldValue(Some(v as f64)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<FieldValue, E> {
                Ok(FieldValue(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<FieldValue, E> {
                Ok(FieldValue(None))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
                if v.is_empty() {
                    Ok(FieldValue(None))
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(FieldValueVisitor)
    }
}

/// Submitted page values, either in schema order or keyed by field id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Submission {
    Ordered(Vec<FieldValue>),
    Keyed(BTreeMap<String, FieldValue>),
}

impl Submission {
    pub fn into_input(self, domain: Domain) -> Result<InputVector, CoreError> {
        match self {
            Submission::Ordered(values) => {
                InputVector::from_values(domain, values.into_iter().map(|v| v.0).collect())
            }
            Submission::Keyed(values) => {
                let mut input = InputVector::new(domain);
                for (id, value) in values {
                    input.set(&id, value.0)?;
                }
                Ok(input)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub values: Submission,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub submission_id: Uuid,
    pub domain: Domain,
    pub label: Label,
    pub diagnosis: String,
}

pub async fn predict(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let domain: Domain = id.parse()?;
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let input = request.values.into_input(domain)?;

    let submission_id = Uuid::new_v4();
    let diagnosis = state.predictor.submit(&input)?;
    tracing::info!(submission_id = %submission_id, domain = %domain, "diagnosis rendered");

    Ok(Json(PredictResponse {
        submission_id,
        domain,
        label: diagnosis.label,
        diagnosis: diagnosis.message,
    }))
}
