//! DTOs for the product information endpoints.

use serde::Serialize;

/// `GET /about`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutDto {
    pub product_name: String,
    pub product_version: String,
}

/// `GET /version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionDto {
    pub product_version: String,
}
