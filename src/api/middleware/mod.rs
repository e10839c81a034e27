//! HTTP middleware for request processing and protection.
//!
//! Provides authentication, media-type negotiation, rate limiting and
//! observability middleware.

pub mod auth;
pub mod media_type;
pub mod rate_limit;
pub mod tracing;
