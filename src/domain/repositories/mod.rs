//! Repository trait definitions for the domain layer.
//!
//! These traits are the collaborators the HTTP layer delegates to. Concrete
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ReferenceDataRepository`] - Code tables and institution roles
//! - [`WorkTaskRepository`] - Work tasks and the roles a person holds
//! - [`TokenRepository`] - API token authentication

pub mod reference_data_repository;
pub mod token_repository;
pub mod work_task_repository;

pub use reference_data_repository::ReferenceDataRepository;
pub use token_repository::{ApiToken, NewApiToken, TokenRepository};
pub use work_task_repository::WorkTaskRepository;

#[cfg(test)]
pub use reference_data_repository::MockReferenceDataRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use work_task_repository::MockWorkTaskRepository;
