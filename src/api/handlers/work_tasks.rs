//! Handler for a person's work tasks.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::work_task::{WorkTaskDto, WorkTaskQuery};
use crate::api::endpoint::Endpoint;
use crate::domain::entities::Principal;
use crate::error::AppError;
use crate::state::AppState;

const WORK_TASKS: Endpoint = Endpoint::new("work tasks");

/// Returns the tasks assigned to a person and to every role they hold.
///
/// # Endpoint
///
/// `GET /work-tasks?personId={id}`
///
/// # Errors
///
/// - **400 Bad Request**: `personId` missing or blank
/// - **403 Forbidden**: the caller may not read this person's tasks
/// - **401 Unauthorized**: the data-layer session expired
pub async fn work_tasks_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<WorkTaskQuery>,
) -> Result<Json<Vec<WorkTaskDto>>, AppError> {
    query
        .validate()
        .map_err(|e| WORK_TASKS.reject(e.into()))?;

    let person_id = query.person_id.unwrap_or_default();

    WORK_TASKS.list(
        state
            .work_task_service
            .tasks_for(&principal, &person_id)
            .await,
    )
}
