//! Core domain entities.
//!
//! Entities are plain data owned by the data-access layer; the API layer only
//! reads them and projects them into DTOs.
//!
//! # Entity Types
//!
//! - [`reference`] - Code tables (denominations, divisions, schools, ...)
//! - [`WorkTask`] - A task assigned to a person or to one of their roles
//! - [`Principal`] - The authenticated caller
//!
//! Reference entities derive Serde so the cache-aside layer can store them as JSON.

pub mod principal;
pub mod reference;
pub mod work_task;

pub use principal::Principal;
pub use reference::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, OfficeType, School,
};
pub use work_task::WorkTask;
