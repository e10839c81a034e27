//! Vendor media-type versioning.
//!
//! Every route is published under `application/vnd.ellucian.v{N}+json`. A client
//! that pins a different version in `Accept` gets `406 Not Acceptable`; plain JSON,
//! wildcards and an absent header are served the route's version.

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

pub const X_MEDIA_TYPE: HeaderName = HeaderName::from_static("x-media-type");

const VENDOR_PREFIX: &str = "application/vnd.ellucian";

static VENDOR_MEDIA_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^application/vnd\.ellucian(?:\.v(\d+))?\+json$")
        .expect("valid media type regex")
});

/// Version a route is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteVersion(pub u32);

impl RouteVersion {
    pub fn media_type(&self) -> String {
        format!("{VENDOR_PREFIX}.v{}+json", self.0)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum MediaRange {
    Versioned(u32),
    AnyVersion,
    Other,
}

fn parse_range(raw: &str) -> MediaRange {
    let essence = raw
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "application/json" | "application/*" | "*/*" => return MediaRange::AnyVersion,
        _ => {}
    }

    let Some(captures) = VENDOR_MEDIA_TYPE.captures(&essence) else {
        return MediaRange::Other;
    };

    match captures.get(1) {
        None => MediaRange::AnyVersion,
        Some(version) => version
            .as_str()
            .parse()
            .map_or(MediaRange::Other, MediaRange::Versioned),
    }
}

/// Decides whether `accept` can be served by `version`.
///
/// Returns the versions the client asked for when none of them match.
fn negotiate(accept: Option<&str>, version: RouteVersion) -> Result<(), Vec<u32>> {
    let Some(accept) = accept.filter(|a| !a.trim().is_empty()) else {
        return Ok(());
    };

    let mut requested = Vec::new();
    let mut generic = false;
    for range in accept.split(',') {
        match parse_range(range) {
            MediaRange::Versioned(n) if n == version.0 => return Ok(()),
            MediaRange::Versioned(n) => requested.push(n),
            MediaRange::AnyVersion => generic = true,
            MediaRange::Other => {}
        }
    }

    if generic || requested.is_empty() {
        Ok(())
    } else {
        Err(requested)
    }
}

/// Rejects version mismatches and stamps successful responses with `X-Media-Type`.
pub async fn layer(State(version): State<RouteVersion>, req: Request, next: Next) -> Response {
    let accept = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok());

    if let Err(requested) = negotiate(accept, version) {
        tracing::debug!(?requested, served = version.0, "Media type not acceptable");
        return AppError::not_acceptable(
            "Requested media type is not supported",
            json!({
                "requested_versions": requested,
                "supported": version.media_type(),
            }),
        )
        .into_response();
    }

    let mut response = next.run(req).await;
    if response.status().is_success()
        && let Ok(value) = HeaderValue::from_str(&version.media_type())
    {
        response.headers_mut().insert(X_MEDIA_TYPE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1: RouteVersion = RouteVersion(1);

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_range("application/vnd.ellucian.v2+json"),
            MediaRange::Versioned(2)
        );
        assert_eq!(
            parse_range(" Application/JSON; charset=utf-8"),
            MediaRange::AnyVersion
        );
        assert_eq!(
            parse_range("application/vnd.ellucian+json"),
            MediaRange::AnyVersion
        );
        assert_eq!(parse_range("text/html"), MediaRange::Other);
    }

    #[test]
    fn test_missing_accept_is_served() {
        assert!(negotiate(None, V1).is_ok());
        assert!(negotiate(Some(""), V1).is_ok());
    }

    #[test]
    fn test_matching_version_is_served() {
        assert!(negotiate(Some("application/vnd.ellucian.v1+json"), V1).is_ok());
        assert!(
            negotiate(
                Some("application/vnd.ellucian.v3+json, application/vnd.ellucian.v1+json"),
                V1
            )
            .is_ok()
        );
    }

    #[test]
    fn test_mismatched_version_is_rejected() {
        assert_eq!(
            negotiate(Some("application/vnd.ellucian.v2+json"), V1),
            Err(vec![2])
        );
    }

    #[test]
    fn test_generic_fallback_is_served() {
        assert!(negotiate(Some("application/vnd.ellucian.v2+json, */*;q=0.1"), V1).is_ok());
    }

    #[test]
    fn test_media_type_name() {
        assert_eq!(V1.media_type(), "application/vnd.ellucian.v1+json");
    }
}
