//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Reference data records, work tasks and the authenticated principal
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - The error kinds a collaborator can report
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Collaborators report failures as [`error::DataError`]; translating those into
//!   HTTP statuses is the API layer's job (see [`crate::api::endpoint`])

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::DataError;
