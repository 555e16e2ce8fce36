use crate::domain::Domain;
use crate::error::CoreError;
use crate::gate;
use crate::schema::Field;

/// The values entered on one prediction page for a single submission.
///
/// Always holds exactly one slot per field of the domain's schema, in schema
/// order. A slot is absent until a value is entered; absent never means zero.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVector {
    domain: Domain,
    values: Vec<Option<f64>>,
}

impl InputVector {
    /// A fresh page: every field absent.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            values: vec![None; domain.schema().len()],
        }
    }

    /// Build from ordered values, one per schema field.
    pub fn from_values(domain: Domain, values: Vec<Option<f64>>) -> Result<Self, CoreError> {
        let schema = domain.schema();
        if values.len() != schema.len() {
            return Err(CoreError::LengthMismatch {
                domain_id: domain.id().to_string(),
                expected: schema.len(),
                actual: values.len(),
            });
        }

        for (field, value) in schema.fields().iter().zip(&values) {
            if let Some(value) = *value {
                check_value(field, value)?;
            }
        }

        Ok(Self { domain, values })
    }

    /// Set or clear a single field by id.
    pub fn set(&mut self, field_id: &str, value: Option<f64>) -> Result<(), CoreError> {
        let schema = self.domain.schema();
        let index = schema
            .position(field_id)
            .ok_or_else(|| CoreError::UnknownField {
                domain_id: self.domain.id().to_string(),
                field_id: field_id.to_string(),
            })?;

        if let Some(v) = value {
            check_value(&schema.fields()[index], v)?;
        }

        self.values[index] = value;
        Ok(())
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn is_incomplete(&self) -> bool {
        gate::is_incomplete(&self.values)
    }

    /// Ids of the fields that are still absent, in schema order.
    pub fn missing_fields(&self) -> Vec<String> {
        self.domain
            .schema()
            .ids()
            .zip(&self.values)
            .filter(|(_, v)| v.is_none())
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// The dense feature vector, or the list of missing fields.
    pub fn complete(&self) -> Result<Vec<f64>, CoreError> {
        if self.is_incomplete() {
            return Err(CoreError::IncompleteInput {
                missing: self.missing_fields(),
            });
        }
        Ok(self.values.iter().flatten().copied().collect())
    }
}

fn check_value(field: &Field, value: f64) -> Result<(), CoreError> {
    if field.accepts(value) {
        return Ok(());
    }
    match field.min {
        Some(min) if value.is_finite() => Err(CoreError::OutOfRange {
            field: field.id.clone(),
            value,
            min,
        }),
        _ => Err(CoreError::NotANumber {
            field: field.id.clone(),
        }),
    }
}
