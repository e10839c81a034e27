//! Repository trait for work tasks.

use crate::domain::DataError;
use crate::domain::entities::WorkTask;
use async_trait::async_trait;

/// Access to work tasks and the role assignments used to route them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkTaskRepository: Send + Sync {
    /// Ids of the institution roles held by a person. Empty if they hold none.
    async fn roles_for_person(&self, person_id: &str) -> Result<Vec<String>, DataError>;

    /// Tasks assigned directly to a person.
    async fn tasks_for_person(&self, person_id: &str) -> Result<Vec<WorkTask>, DataError>;

    /// Tasks assigned to any of the given roles.
    async fn tasks_for_roles(&self, role_ids: &[String]) -> Result<Vec<WorkTask>, DataError>;
}
