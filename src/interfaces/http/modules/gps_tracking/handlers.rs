//! GPS tracking API handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use super::dto::{CreateGpsPingRequest, GpsPingDto};
use crate::domain::{RepositoryProvider, LATEST_PINGS_LIMIT};
use crate::interfaces::http::common::ValidatedJson;
use crate::interfaces::http::error::{ApiError, ErrorBody};

#[utoipa::path(
    get,
    path = "/api/gps-tracking",
    tag = "GPS Tracking",
    responses(
        (status = 200, description = "Latest 100 pings with creator, newest first", body = Vec<GpsPingDto>),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_pings(
    State(repos): State<Arc<dyn RepositoryProvider>>,
) -> Result<Json<Vec<GpsPingDto>>, ApiError> {
    let pings = repos.gps_pings().list_latest(LATEST_PINGS_LIMIT).await?;
    Ok(Json(pings.into_iter().map(GpsPingDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/gps-tracking",
    tag = "GPS Tracking",
    request_body = CreateGpsPingRequest,
    responses(
        (status = 200, description = "Stored ping with creator", body = GpsPingDto),
        (status = 400, description = "Invalid coordinates", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn record_ping(
    State(repos): State<Arc<dyn RepositoryProvider>>,
    ValidatedJson(request): ValidatedJson<CreateGpsPingRequest>,
) -> Result<Json<GpsPingDto>, ApiError> {
    let ping = repos.gps_pings().record_ping(request.into()).await?;

    metrics::counter!("gps_pings_recorded_total").increment(1);
    debug!(ping_id = %ping.id, user_id = %ping.user_id, "GPS ping recorded");

    Ok(Json(ping.into()))
}
