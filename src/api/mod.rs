//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into collaborator calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`endpoint`] - Error-to-status mapping and entity-to-DTO adaptation
//! - [`extract`] - Request extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, media-type and request processing middleware
//! - [`routes`] - The route table

pub mod dto;
pub mod endpoint;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
