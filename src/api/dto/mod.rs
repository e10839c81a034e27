//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs are flat projections of domain entities, built through `From`
//! conversions. Request DTOs use Serde for query parsing and validator for
//! input validation.

pub mod about;
pub mod health;
pub mod reference;
pub mod work_task;
