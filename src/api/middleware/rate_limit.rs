//! Rate limiting middleware using the token bucket algorithm.
//!
//! Limits are keyed by client IP. Behind a trusted reverse proxy the IP comes from
//! `X-Forwarded-For` / `X-Real-IP` ([`SmartIpKeyExtractor`]); otherwise from the
//! socket peer address ([`PeerIpKeyExtractor`]).

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Requests per second and burst size of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quota {
    pub per_second: u32,
    pub burst_size: u32,
}

impl Quota {
    /// Time for the bucket to regain one request.
    pub fn replenish_interval(&self) -> Duration {
        Duration::from_secs(1) / self.per_second
    }
}

/// Unauthenticated routes: 2 requests per second, burst of 100.
pub const PUBLIC: Quota = Quota {
    per_second: 2,
    burst_size: 100,
};

/// Token-authenticated routes: 10 requests per second, burst of 50.
pub const AUTHENTICATED: Quota = Quota {
    per_second: 10,
    burst_size: 50,
};

fn governor_layer<K>(
    quota: Quota,
    extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = GovernorConfigBuilder::default()
        .period(quota.replenish_interval())
        .burst_size(quota.burst_size)
        .key_extractor(extractor)
        .finish()
        .unwrap_or_else(|| panic!("invalid rate limit quota {quota:?}"));

    GovernorLayer::new(Arc::new(governor_conf))
}

/// Applies `quota` to every route of `router`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn limit<S>(router: Router<S>, quota: Quota, behind_proxy: bool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    if behind_proxy {
        router.layer(governor_layer(quota, SmartIpKeyExtractor))
    } else {
        router.layer(governor_layer(quota, PeerIpKeyExtractor))
    }
}
