//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - Public routes (`/healthcheck`, `/health`, `/version`, `/tax-form-boxcodes`)
//! - Token-authenticated routes (everything else in [`crate::api::routes::route_table`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, separate quotas for public and authenticated routes
//! - **Media type** - Per-route vendor version negotiation
//! - **Authentication** - Bearer token
//! - **Path normalization** - Trailing slash handling

use crate::api::middleware::{rate_limit, tracing};
use crate::api::routes::{Access, routes_for};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let public = rate_limit::limit(
        routes_for(&state, Access::Anonymous),
        rate_limit::PUBLIC,
        behind_proxy,
    );
    let authenticated = rate_limit::limit(
        routes_for(&state, Access::Authenticated),
        rate_limit::AUTHENTICATED,
        behind_proxy,
    );

    let router = Router::new()
        .merge(public)
        .merge(authenticated)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
