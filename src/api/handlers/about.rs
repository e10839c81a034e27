//! Handlers for product information.

use axum::{Json, extract::State};

use crate::api::dto::about::{AboutDto, VersionDto};
use crate::state::AppState;

/// Build version as `major.minor.patch`, without pre-release or build metadata.
pub fn product_version() -> String {
    format!(
        "{}.{}.{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH")
    )
}

/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> Json<AboutDto> {
    Json(AboutDto {
        product_name: state.settings.product_name.clone(),
        product_version: product_version(),
    })
}

/// `GET /version`
///
/// Anonymous callers may use this endpoint.
pub async fn version_handler() -> Json<VersionDto> {
    Json(VersionDto {
        product_version: product_version(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_version_has_three_numeric_parts() {
        let version = product_version();
        let parts: Vec<&str> = version.split('.').collect();

        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u64>().is_ok()));
    }
}
