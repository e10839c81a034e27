//! Repository trait for reference data.

use crate::domain::DataError;
use crate::domain::entities::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, School,
};
use async_trait::async_trait;

/// Read-only access to the institution's code tables.
///
/// Every list is returned in the repository's natural order (by code, or by id
/// for text records). Callers must not re-sort.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReferenceDataRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceDataRepository: Send + Sync {
    async fn denominations(&self) -> Result<Vec<Denomination>, DataError>;

    async fn divisions(&self) -> Result<Vec<Division>, DataError>;

    async fn schools(&self) -> Result<Vec<School>, DataError>;

    async fn office_codes(&self) -> Result<Vec<OfficeCode>, DataError>;

    async fn convenience_fees(&self) -> Result<Vec<ConvenienceFee>, DataError>;

    async fn miscellaneous_text(&self) -> Result<Vec<MiscellaneousText>, DataError>;

    /// Tax form box codes across all supported tax forms.
    async fn box_codes(&self) -> Result<Vec<BoxCode>, DataError>;

    async fn institution_roles(&self) -> Result<Vec<InstitutionRole>, DataError>;

    /// Round-trips to the backing store. Used by the health probe.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Database`] if the store is unreachable.
    async fn ping(&self) -> Result<(), DataError>;
}
