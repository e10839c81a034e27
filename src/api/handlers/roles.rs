//! Handler for institution role titles.

use axum::{Json, extract::State};

use crate::api::dto::reference::RoleDto;
use crate::api::endpoint::Endpoint;
use crate::api::extract::BypassCache;
use crate::error::AppError;
use crate::state::AppState;

const ROLES: Endpoint = Endpoint::new("institution roles");

/// Lists the role titles defined by the institution.
///
/// # Endpoint
///
/// `GET /identity-profile-roles`
///
/// Served from cache unless the request carries `Cache-Control: no-cache`, in
/// which case the roles are re-read and the cache entry refreshed.
pub async fn identity_profile_roles_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<RoleDto>>, AppError> {
    ROLES.list(state.reference_data_service.institution_roles(bypass).await)
}
