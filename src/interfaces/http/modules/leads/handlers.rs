//! Lead API handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use super::dto::{CreateLeadRequest, LeadDto};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "All leads with creator, newest first", body = Vec<LeadDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_leads(
    State(repos): State<Arc<dyn RepositoryProvider>>,
) -> Result<Json<Vec<LeadDto>>, ApiError> {
    let leads = repos.leads().list_leads().await?;
    Ok(Json(leads.into_iter().map(LeadDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Leads",
    request_body = CreateLeadRequest,
    responses(
        (status = 200, description = "Stored lead with creator", body = LeadDto),
        (status = 400, description = "Invalid coordinates or missing fields", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_lead(
    State(repos): State<Arc<dyn RepositoryProvider>>,
    ValidatedJson(request): ValidatedJson<CreateLeadRequest>,
) -> Result<Json<LeadDto>, ApiError> {
    let lead = repos.leads().create_lead(request.into()).await?;

    metrics::counter!("leads_created_total").increment(1);
    info!(lead_id = %lead.id, user_id = %lead.user_id, "Lead captured");

    Ok(Json(lead.into()))
}
