//! Work task entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work waiting on a person, either assigned to them directly or to a
/// role they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTask {
    pub id: String,
    pub category: String,
    pub description: String,
    pub process_code: Option<String>,
    pub start_date: Option<NaiveDate>,
}
