//! Cache keys for reference data.
//!
//! The cache backend adds its own namespace prefix; these are the bare keys.

pub const DENOMINATIONS: &str = "denominations";
pub const DIVISIONS: &str = "divisions";
pub const SCHOOLS: &str = "schools";
pub const OFFICE_CODES: &str = "office-codes";
pub const CONVENIENCE_FEES: &str = "convenience-fees";
pub const MISCELLANEOUS_TEXT: &str = "miscellaneous-text";
pub const BOX_CODES: &str = "tax-form-box-codes";
pub const INSTITUTION_ROLES: &str = "institution-roles";

/// Every key the reference data service writes.
pub const ALL: &[&str] = &[
    DENOMINATIONS,
    DIVISIONS,
    SCHOOLS,
    OFFICE_CODES,
    CONVENIENCE_FEES,
    MISCELLANEOUS_TEXT,
    BOX_CODES,
    INSTITUTION_ROLES,
];
