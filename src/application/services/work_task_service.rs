//! Work task lookup.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::DataError;
use crate::domain::entities::principal::VIEW_ANY_PERSON_WORK_TASKS;
use crate::domain::entities::{Principal, WorkTask};
use crate::domain::repositories::WorkTaskRepository;

/// Service returning the work tasks waiting on a person.
///
/// A person's tasks are the ones assigned to them directly followed by the ones
/// assigned to any role they hold. A task reachable both ways appears once, at
/// its first position.
pub struct WorkTaskService<R: WorkTaskRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: WorkTaskRepository + ?Sized> WorkTaskService<R> {
    /// Creates a new work task service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the tasks for `person_id` on behalf of `principal`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidArgument`] if `person_id` is blank.
    /// Returns [`DataError::PermissionDenied`] if the principal is neither the person
    /// nor holds [`VIEW_ANY_PERSON_WORK_TASKS`].
    /// Propagates repository errors unchanged.
    pub async fn tasks_for(
        &self,
        principal: &Principal,
        person_id: &str,
    ) -> Result<Vec<WorkTask>, DataError> {
        if person_id.trim().is_empty() {
            return Err(DataError::InvalidArgument(
                "A person id is required to retrieve work tasks".to_string(),
            ));
        }

        if !principal.is_self(person_id) && !principal.has_permission(VIEW_ANY_PERSON_WORK_TASKS)
        {
            return Err(DataError::PermissionDenied(format!(
                "{} cannot view work tasks for {}",
                principal.person_id, person_id
            )));
        }

        let mut tasks = self.repository.tasks_for_person(person_id).await?;

        let roles = self.repository.roles_for_person(person_id).await?;
        if roles.is_empty() {
            return Ok(tasks);
        }

        let role_tasks = self.repository.tasks_for_roles(&roles).await?;

        let mut seen: HashSet<String> = tasks.iter().map(|t| t.id.clone()).collect();
        tasks.extend(role_tasks.into_iter().filter(|t| seen.insert(t.id.clone())));

        Ok(tasks)
    }
}
