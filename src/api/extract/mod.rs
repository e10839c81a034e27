//! Request extractors shared by handlers.

pub mod bypass_cache;

pub use bypass_cache::BypassCache;
