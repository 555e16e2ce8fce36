use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use outbreak_core::{Domain, Field};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct DomainSummary {
    id: Domain,
    title: &'static str,
    field_count: usize,
}

/// Everything a client needs to lay out one prediction page.
#[derive(Serialize)]
pub struct DomainPage {
    id: Domain,
    title: &'static str,
    heading: &'static str,
    submit_label: &'static str,
    fields: Vec<Field>,
}

pub async fn list_domains() -> Json<Vec<DomainSummary>> {
    let domains = Domain::ALL
        .into_iter()
        .map(|d| DomainSummary {
            id: d,
            title: d.title(),
            field_count: d.schema().len(),
        })
        .collect();
    Json(domains)
}

pub async fn get_domain_page(Path(id): Path<String>) -> Result<Json<DomainPage>, ApiError> {
    let domain: Domain = id.parse()?;

    Ok(Json(DomainPage {
        id: domain,
        title: domain.title(),
        heading: domain.heading(),
        submit_label: domain.submit_label(),
        fields: domain.schema().fields().to_vec(),
    }))
}
