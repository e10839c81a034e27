//! Handler for reference-data cache invalidation.

use axum::{extract::State, http::StatusCode};

use crate::api::endpoint::Endpoint;
use crate::error::AppError;
use crate::state::AppState;

const CACHE_KEYS: Endpoint = Endpoint::new("cache keys");

/// Drops every cached reference-data list so the next read goes to the database.
///
/// # Endpoint
///
/// `POST /eedm-cache-keys`
///
/// Responds `200 OK` with an empty body.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let cleared = state
        .cache_management_service
        .clear_reference_data()
        .await
        .map_err(|e| CACHE_KEYS.fail(e))?;

    tracing::info!(cleared, "Reference data cache cleared on request");
    Ok(StatusCode::OK)
}
