//! Response DTOs for the code-table endpoints.
//!
//! Each DTO is a flat projection of one domain entity, built with `From`.

use serde::Serialize;

use crate::domain::entities::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, OfficeType, School,
};

/// `GET /denominations` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenominationDto {
    pub code: String,
    pub description: String,
}

impl From<Denomination> for DenominationDto {
    fn from(d: Denomination) -> Self {
        Self {
            code: d.code,
            description: d.description,
        }
    }
}

/// `GET /divisions` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionDto {
    pub code: String,
    pub description: String,
}

impl From<Division> for DivisionDto {
    fn from(d: Division) -> Self {
        Self {
            code: d.code,
            description: d.description,
        }
    }
}

/// `GET /schools` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolDto {
    pub code: String,
    pub description: String,
    pub academic_levels: Vec<String>,
}

impl From<School> for SchoolDto {
    fn from(s: School) -> Self {
        Self {
            code: s.code,
            description: s.description,
            academic_levels: s.academic_levels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeTypeDto {
    FinancialAid,
    Registrar,
    Other,
}

impl From<OfficeType> for OfficeTypeDto {
    fn from(t: OfficeType) -> Self {
        match t {
            OfficeType::FinancialAid => Self::FinancialAid,
            OfficeType::Registrar => Self::Registrar,
            OfficeType::Other => Self::Other,
        }
    }
}

/// `GET /office-codes` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeCodeDto {
    pub code: String,
    pub description: String,
    pub office_type: OfficeTypeDto,
}

impl From<OfficeCode> for OfficeCodeDto {
    fn from(o: OfficeCode) -> Self {
        Self {
            code: o.code,
            description: o.description,
            office_type: o.office_type.into(),
        }
    }
}

/// `GET /ecommerce/convenience-fees` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvenienceFeeDto {
    pub code: String,
    pub description: String,
}

impl From<ConvenienceFee> for ConvenienceFeeDto {
    fn from(f: ConvenienceFee) -> Self {
        Self {
            code: f.code,
            description: f.description,
        }
    }
}

/// `GET /miscellaneous-text` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiscellaneousTextDto {
    pub id: String,
    pub text: String,
}

impl From<MiscellaneousText> for MiscellaneousTextDto {
    fn from(t: MiscellaneousText) -> Self {
        Self {
            id: t.id,
            text: t.text,
        }
    }
}

/// `GET /tax-form-boxcodes` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxCodeDto {
    pub code: String,
    pub description: String,
    pub tax_code: String,
}

impl From<BoxCode> for BoxCodeDto {
    fn from(b: BoxCode) -> Self {
        Self {
            code: b.code,
            description: b.description,
            tax_code: b.tax_code,
        }
    }
}

/// `GET /identity-profile-roles` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDto {
    pub title: String,
}

impl From<InstitutionRole> for RoleDto {
    fn from(r: InstitutionRole) -> Self {
        Self { title: r.title }
    }
}
