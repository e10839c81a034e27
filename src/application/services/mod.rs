//! Business logic services for the application layer.

pub mod auth_service;
pub mod cache_keys;
pub mod cache_management_service;
pub mod health_service;
pub mod reference_data_service;
pub mod work_task_service;

pub use auth_service::AuthService;
pub use cache_management_service::CacheManagementService;
pub use health_service::{HealthReport, HealthService, HealthStatus};
pub use reference_data_service::ReferenceDataService;
pub use work_task_service::WorkTaskService;
