//! Handler for the health check endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::health::{HealthLevel, HealthQuery};
use crate::api::endpoint::{Endpoint, Fallback};
use crate::application::services::HealthStatus;
use crate::domain::DataError;
use crate::error::AppError;
use crate::state::AppState;

const HEALTH: Endpoint = Endpoint::new("health status").with_fallback(Fallback::Internal);

/// Reports whether the service can take traffic.
///
/// # Endpoint
///
/// `GET /healthcheck` (alias `GET /health`)
///
/// # Query Parameters
///
/// - `level` (optional): omit for the load-balancer check, `detailed` to probe
///   the database and cache
///
/// # Response Codes
///
/// - **204 No Content**: available
/// - **503 Service Unavailable**: unavailable
/// - **500 Internal Server Error**: degraded
/// - **403 Forbidden**: `level=detailed` while detailed checks are disabled
/// - **400 Bad Request**: unknown `level`
pub async fn health_handler(
    State(state): State<AppState>,
    Query(query): Query<HealthQuery>,
) -> Result<StatusCode, AppError> {
    let status = match query.level() {
        Some(HealthLevel::Basic) => state.health_service.basic().await,
        Some(HealthLevel::Detailed) => {
            if !state.settings.detailed_health_check {
                return Err(HEALTH.reject(AppError::forbidden(
                    "Detailed health checks are disabled",
                    json!({}),
                )));
            }
            let report = state.health_service.detailed().await;
            tracing::debug!(?report, "Detailed health probe finished");
            report.status
        }
        None => {
            return Err(HEALTH.reject(AppError::bad_request(
                "Invalid health check level",
                json!({"level": query.level}),
            )));
        }
    };

    respond(status)
}

fn respond(status: HealthStatus) -> Result<StatusCode, AppError> {
    match status {
        HealthStatus::Available => Ok(StatusCode::NO_CONTENT),
        HealthStatus::Unavailable => Err(HEALTH.reject(AppError::unavailable(
            "Service unavailable",
            json!({}),
        ))),
        HealthStatus::Degraded => Err(HEALTH.fail(DataError::Cache(
            "cache backend unreachable".to_string(),
        ))),
    }
}
