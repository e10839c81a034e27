//! `Cache-Control: no-cache` detection.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

/// `true` when the caller asked for fresh data via `Cache-Control: no-cache`
/// (or `no-store`, or a legacy `Pragma: no-cache`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BypassCache(pub bool);

impl<S> FromRequestParts<S> for BypassCache
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BypassCache(wants_fresh(&parts.headers)))
    }
}

pub fn wants_fresh(headers: &HeaderMap) -> bool {
    let cache_control = headers
        .get_all(header::CACHE_CONTROL)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .any(|directive| {
            directive.eq_ignore_ascii_case("no-cache") || directive.eq_ignore_ascii_case("no-store")
        });

    cache_control
        || headers
            .get(header::PRAGMA)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("no-cache"))
}
