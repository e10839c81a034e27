//! DTOs for the work task endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::domain::entities::WorkTask;

/// Query string of `GET /work-tasks`.
#[derive(Debug, Deserialize, Validate)]
pub struct WorkTaskQuery {
    #[serde(rename = "personId")]
    #[validate(
        required(message = "personId is required"),
        length(min = 1, max = 64, message = "personId must be 1-64 characters")
    )]
    pub person_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkTaskDto {
    pub id: String,
    pub category: String,
    pub description: String,
    pub process_code: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl From<WorkTask> for WorkTaskDto {
    fn from(t: WorkTask) -> Self {
        Self {
            id: t.id,
            category: t.category,
            description: t.description,
            process_code: t.process_code,
            start_date: t.start_date,
        }
    }
}
