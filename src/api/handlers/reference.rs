//! Handlers for the code-table endpoints.
//!
//! Every handler reads one list through the cache-aside
//! [`ReferenceDataService`](crate::application::services::ReferenceDataService)
//! and maps it to DTOs. `Cache-Control: no-cache` forces a fresh read.

use axum::{Json, extract::State};

use crate::api::dto::reference::{
    BoxCodeDto, ConvenienceFeeDto, DenominationDto, DivisionDto, MiscellaneousTextDto,
    OfficeCodeDto, SchoolDto,
};
use crate::api::endpoint::Endpoint;
use crate::api::extract::BypassCache;
use crate::error::AppError;
use crate::state::AppState;

const DENOMINATIONS: Endpoint = Endpoint::new("denominations");
const DIVISIONS: Endpoint = Endpoint::new("divisions");
const SCHOOLS: Endpoint = Endpoint::new("schools");
const OFFICE_CODES: Endpoint = Endpoint::new("office codes");
const CONVENIENCE_FEES: Endpoint = Endpoint::new("convenience fees");
const MISCELLANEOUS_TEXT: Endpoint = Endpoint::new("miscellaneous text");
const BOX_CODES: Endpoint = Endpoint::new("tax form box codes");

/// `GET /denominations`
pub async fn denominations_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<DenominationDto>>, AppError> {
    DENOMINATIONS.list(state.reference_data_service.denominations(bypass).await)
}

/// `GET /divisions`
pub async fn divisions_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<DivisionDto>>, AppError> {
    DIVISIONS.list(state.reference_data_service.divisions(bypass).await)
}

/// `GET /schools`
pub async fn schools_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<SchoolDto>>, AppError> {
    SCHOOLS.list(state.reference_data_service.schools(bypass).await)
}

/// `GET /office-codes`
pub async fn office_codes_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<OfficeCodeDto>>, AppError> {
    OFFICE_CODES.list(state.reference_data_service.office_codes(bypass).await)
}

/// `GET /ecommerce/convenience-fees`
pub async fn convenience_fees_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<ConvenienceFeeDto>>, AppError> {
    CONVENIENCE_FEES.list(state.reference_data_service.convenience_fees(bypass).await)
}

/// `GET /miscellaneous-text`
pub async fn miscellaneous_text_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<MiscellaneousTextDto>>, AppError> {
    MISCELLANEOUS_TEXT.list(
        state
            .reference_data_service
            .miscellaneous_text(bypass)
            .await,
    )
}

/// `GET /tax-form-boxcodes`
///
/// Public: no bearer token is required.
pub async fn box_codes_handler(
    State(state): State<AppState>,
    BypassCache(bypass): BypassCache,
) -> Result<Json<Vec<BoxCodeDto>>, AppError> {
    BOX_CODES.list(state.reference_data_service.box_codes(bypass).await)
}
