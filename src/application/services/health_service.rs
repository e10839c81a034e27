//! Health probes for the database and cache.

use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::domain::repositories::ReferenceDataRepository;
use crate::infrastructure::cache::CacheService;

/// Overall state reported by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Available,
    /// The database answers but the configured cache does not.
    Degraded,
    Unavailable,
}

/// Result of a detailed probe.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub database: bool,
    pub cache: bool,
}

pub struct HealthService<R: ReferenceDataRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
}

impl<R: ReferenceDataRepository + ?Sized> HealthService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Load-balancer check: the process is up, and a configured cache answers.
    pub async fn basic(&self) -> HealthStatus {
        if self.cache.is_enabled() && !self.cache.health_check().await {
            warn!("Cache backend unreachable during basic health check");
            return HealthStatus::Unavailable;
        }
        HealthStatus::Available
    }

    /// Full check of every dependency.
    pub async fn detailed(&self) -> HealthReport {
        let database = match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database probe failed");
                false
            }
        };

        let cache = !self.cache.is_enabled() || self.cache.health_check().await;

        let status = match (database, cache) {
            (true, true) => HealthStatus::Available,
            (true, false) => HealthStatus::Degraded,
            (false, _) => HealthStatus::Unavailable,
        };

        HealthReport {
            status,
            database,
            cache,
        }
    }
}
