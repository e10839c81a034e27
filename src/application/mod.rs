//! Application layer services.
//!
//! Services coordinate repository calls, caching and permission rules, and give
//! the HTTP handlers one call per endpoint.
//!
//! # Available Services
//!
//! - [`services::reference_data_service::ReferenceDataService`] - Cache-aside reads of code tables
//! - [`services::work_task_service::WorkTaskService`] - Permission-checked work task lookup
//! - [`services::auth_service::AuthService`] - API token authentication
//! - [`services::cache_management_service::CacheManagementService`] - Reference data cache invalidation
//! - [`services::health_service::HealthService`] - Database and cache probes

pub mod services;
