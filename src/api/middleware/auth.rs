//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the resolved [`crate::domain::entities::Principal`] is stored in the
/// request extensions, where handlers read it with `Extension<Principal>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or the token is
/// unknown, revoked or expired. `WWW-Authenticate: Bearer` is added per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let principal = st.auth_service.authenticate(&token).await?;
    tracing::debug!(person_id = %principal.person_id, "Request authenticated");

    parts.extensions.insert(principal);
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
