//! Reference data entities (code tables).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A religious denomination code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub code: String,
    pub description: String,
}

/// An academic or administrative division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub code: String,
    pub description: String,
}

/// A school within the institution and the academic levels it offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub code: String,
    pub description: String,
    pub academic_levels: Vec<String>,
}

/// The kind of office an [`OfficeCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeType {
    FinancialAid,
    Registrar,
    Other,
}

impl FromStr for OfficeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "financial_aid" => Ok(Self::FinancialAid),
            "registrar" => Ok(Self::Registrar),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown office type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeCode {
    pub code: String,
    pub description: String,
    pub office_type: OfficeType,
}

/// A fee charged on top of an e-commerce payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvenienceFee {
    pub code: String,
    pub description: String,
}

/// A block of institution-maintained text (notices, disclaimers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscellaneousText {
    pub id: String,
    pub text: String,
}

/// A box on a tax form (e.g. a 1098-T box) and the tax code it reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCode {
    pub code: String,
    pub description: String,
    pub tax_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRole {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_type_from_str() {
        assert_eq!("registrar".parse::<OfficeType>(), Ok(OfficeType::Registrar));
        assert_eq!(
            "financial_aid".parse::<OfficeType>(),
            Ok(OfficeType::FinancialAid)
        );
        assert!("bursar".parse::<OfficeType>().is_err());
    }

    #[test]
    fn test_school_survives_json_round_trip() {
        let school = School {
            code: "ENG".to_string(),
            description: "School of Engineering".to_string(),
            academic_levels: vec!["UG".to_string(), "GR".to_string()],
        };

        let raw = serde_json::to_string(&school).unwrap();
        let back: School = serde_json::from_str(&raw).unwrap();

        assert_eq!(back, school);
    }
}
