//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching serialized reference data.
///
/// Reads and writes are fail-open: implementations log backend errors and behave
/// like a miss, so a broken cache degrades to repository reads. Invalidation is
/// the exception and reports failures, since a caller asking to clear the cache
/// needs to know whether it happened.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached value for `key`, or `None` on miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`. `ttl_seconds = None` uses the backend default.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Removes `key`. Returns `true` if an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend rejected the delete.
    async fn invalidate(&self, key: &str) -> CacheResult<bool>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Whether a real backend is configured. The no-op cache reports `false`.
    fn is_enabled(&self) -> bool {
        true
    }
}
