//! HTTP request handlers for API endpoints.
//!
//! Handlers are thin: one collaborator call, then [`crate::api::endpoint::Endpoint`]
//! maps the entities to DTOs or the error to a status.

pub mod about;
pub mod cache;
pub mod health;
pub mod reference;
pub mod roles;
pub mod work_tasks;

pub use about::{about_handler, version_handler};
pub use cache::clear_cache_handler;
pub use health::health_handler;
pub use reference::{
    box_codes_handler, convenience_fees_handler, denominations_handler, divisions_handler,
    miscellaneous_text_handler, office_codes_handler, schools_handler,
};
pub use roles::identity_profile_roles_handler;
pub use work_tasks::work_tasks_handler;
