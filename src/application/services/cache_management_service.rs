//! Reference data cache invalidation.

use std::sync::Arc;
use tracing::info;

use super::cache_keys;
use crate::domain::DataError;
use crate::infrastructure::cache::CacheService;

/// Clears cached reference data so the next read goes to the repository.
pub struct CacheManagementService {
    cache: Arc<dyn CacheService>,
}

impl CacheManagementService {
    pub fn new(cache: Arc<dyn CacheService>) -> Self {
        Self { cache }
    }

    /// Removes every reference data entry. Returns how many entries existed.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Cache`] on the first key the backend fails to delete;
    /// keys before it stay removed.
    pub async fn clear_reference_data(&self) -> Result<usize, DataError> {
        let mut removed = 0;

        for key in cache_keys::ALL {
            let existed = self
                .cache
                .invalidate(key)
                .await
                .map_err(|e| DataError::Cache(e.to_string()))?;
            if existed {
                removed += 1;
            }
        }

        info!(removed, "Cleared reference data cache");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::{CacheError, MockCacheService};

    #[tokio::test]
    async fn test_clears_every_reference_key() {
        let mut cache = MockCacheService::new();
        cache
            .expect_invalidate()
            .times(cache_keys::ALL.len())
            .returning(|key| Ok(key == cache_keys::SCHOOLS || key == cache_keys::DIVISIONS));

        let service = CacheManagementService::new(Arc::new(cache));

        assert_eq!(service.clear_reference_data().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_backend_failure_is_reported() {
        let mut cache = MockCacheService::new();
        cache
            .expect_invalidate()
            .returning(|_| Err(CacheError::OperationError("connection reset".to_string())));

        let service = CacheManagementService::new(Arc::new(cache));

        let err = service.clear_reference_data().await.unwrap_err();
        assert!(matches!(err, DataError::Cache(_)));
    }
}
