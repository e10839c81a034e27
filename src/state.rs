//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CacheManagementService, HealthService, ReferenceDataService, WorkTaskService,
};
use crate::domain::repositories::{ReferenceDataRepository, TokenRepository, WorkTaskRepository};
use crate::infrastructure::cache::CacheService;

/// Deployment-specific values surfaced by the API.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Reported by `GET /about`.
    pub product_name: String,
    /// Whether `GET /healthcheck?level=detailed` is served.
    pub detailed_health_check: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            product_name: "Reference Data API".to_string(),
            detailed_health_check: false,
        }
    }
}

/// Collaborators behind the API. Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct AppState {
    pub reference_data_service: Arc<ReferenceDataService<dyn ReferenceDataRepository>>,
    pub work_task_service: Arc<WorkTaskService<dyn WorkTaskRepository>>,
    pub cache_management_service: Arc<CacheManagementService>,
    pub health_service: Arc<HealthService<dyn ReferenceDataRepository>>,
    pub auth_service: Arc<AuthService<dyn TokenRepository>>,
    pub settings: ServiceSettings,
}

impl AppState {
    /// Wires every service from the three repositories and a cache backend.
    pub fn new(
        reference_data: Arc<dyn ReferenceDataRepository>,
        work_tasks: Arc<dyn WorkTaskRepository>,
        tokens: Arc<dyn TokenRepository>,
        cache: Arc<dyn CacheService>,
        token_signing_secret: String,
        cache_ttl_seconds: u64,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            reference_data_service: Arc::new(
                ReferenceDataService::new(reference_data.clone(), cache.clone())
                    .with_ttl(cache_ttl_seconds),
            ),
            work_task_service: Arc::new(WorkTaskService::new(work_tasks)),
            cache_management_service: Arc::new(CacheManagementService::new(cache.clone())),
            health_service: Arc::new(HealthService::new(reference_data, cache)),
            auth_service: Arc::new(AuthService::new(tokens, token_signing_secret)),
            settings,
        }
    }
}
