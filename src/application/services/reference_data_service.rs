//! Cache-aside access to reference data.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

use super::cache_keys;
use crate::domain::DataError;
use crate::domain::entities::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, School,
};
use crate::domain::repositories::ReferenceDataRepository;
use crate::infrastructure::cache::CacheService;

/// Reads code tables through the cache.
///
/// A cached list is returned as-is. On a miss, or when the caller asks to bypass
/// the cache, the repository is read and the cache entry refreshed. Cache faults
/// never fail a request; a corrupt entry is treated as a miss.
pub struct ReferenceDataService<R: ReferenceDataRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    ttl_seconds: Option<u64>,
}

impl<R: ReferenceDataRepository + ?Sized> ReferenceDataService<R> {
    /// Creates a service that uses the cache backend's default TTL.
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            repository,
            cache,
            ttl_seconds: None,
        }
    }

    /// Overrides the TTL applied to refreshed entries.
    pub fn with_ttl(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = Some(ttl_seconds);
        self
    }

    async fn cached<T, F, Fut>(
        &self,
        key: &'static str,
        bypass_cache: bool,
        load: F,
    ) -> Result<Vec<T>, DataError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, DataError>>,
    {
        if !bypass_cache
            && let Ok(Some(raw)) = self.cache.get(key).await
        {
            match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => return Ok(items),
                Err(e) => warn!(key, error = %e, "Discarding unreadable cache entry"),
            }
        }

        let items = load().await?;
        debug!(key, count = items.len(), bypass_cache, "Loaded reference data");

        match serde_json::to_string(&items) {
            Ok(raw) => {
                if let Err(e) = self.cache.set(key, &raw, self.ttl_seconds).await {
                    warn!(key, error = %e, "Failed to refresh cache entry");
                }
            }
            Err(e) => warn!(key, error = %e, "Failed to serialize reference data for cache"),
        }

        Ok(items)
    }

    pub async fn denominations(&self, bypass_cache: bool) -> Result<Vec<Denomination>, DataError> {
        self.cached(cache_keys::DENOMINATIONS, bypass_cache, || {
            self.repository.denominations()
        })
        .await
    }

    pub async fn divisions(&self, bypass_cache: bool) -> Result<Vec<Division>, DataError> {
        self.cached(cache_keys::DIVISIONS, bypass_cache, || {
            self.repository.divisions()
        })
        .await
    }

    pub async fn schools(&self, bypass_cache: bool) -> Result<Vec<School>, DataError> {
        self.cached(cache_keys::SCHOOLS, bypass_cache, || self.repository.schools())
            .await
    }

    pub async fn office_codes(&self, bypass_cache: bool) -> Result<Vec<OfficeCode>, DataError> {
        self.cached(cache_keys::OFFICE_CODES, bypass_cache, || {
            self.repository.office_codes()
        })
        .await
    }

    pub async fn convenience_fees(
        &self,
        bypass_cache: bool,
    ) -> Result<Vec<ConvenienceFee>, DataError> {
        self.cached(cache_keys::CONVENIENCE_FEES, bypass_cache, || {
            self.repository.convenience_fees()
        })
        .await
    }

    pub async fn miscellaneous_text(
        &self,
        bypass_cache: bool,
    ) -> Result<Vec<MiscellaneousText>, DataError> {
        self.cached(cache_keys::MISCELLANEOUS_TEXT, bypass_cache, || {
            self.repository.miscellaneous_text()
        })
        .await
    }

    pub async fn box_codes(&self, bypass_cache: bool) -> Result<Vec<BoxCode>, DataError> {
        self.cached(cache_keys::BOX_CODES, bypass_cache, || {
            self.repository.box_codes()
        })
        .await
    }

    pub async fn institution_roles(
        &self,
        bypass_cache: bool,
    ) -> Result<Vec<InstitutionRole>, DataError> {
        self.cached(cache_keys::INSTITUTION_ROLES, bypass_cache, || {
            self.repository.institution_roles()
        })
        .await
    }
}
