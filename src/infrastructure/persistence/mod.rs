//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgReferenceDataRepository`] - Code tables and institution roles
//! - [`PgWorkTaskRepository`] - Work tasks and role assignments
//! - [`PgTokenRepository`] - API token storage and validation

pub mod pg_reference_data_repository;
pub mod pg_token_repository;
pub mod pg_work_task_repository;
mod sql_error;

pub use pg_reference_data_repository::PgReferenceDataRepository;
pub use pg_token_repository::PgTokenRepository;
pub use pg_work_task_repository::PgWorkTaskRepository;
