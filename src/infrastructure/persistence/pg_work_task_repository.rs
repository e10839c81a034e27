//! PostgreSQL implementation of the work task repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::DataError;
use crate::domain::entities::WorkTask;
use crate::domain::repositories::WorkTaskRepository;

type WorkTaskRow = (String, String, String, Option<String>, Option<NaiveDate>);

fn row_to_task((id, category, description, process_code, start_date): WorkTaskRow) -> WorkTask {
    WorkTask {
        id,
        category,
        description,
        process_code,
        start_date,
    }
}

/// PostgreSQL repository for work tasks.
pub struct PgWorkTaskRepository {
    pool: Arc<PgPool>,
}

impl PgWorkTaskRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkTaskRepository for PgWorkTaskRepository {
    async fn roles_for_person(&self, person_id: &str) -> Result<Vec<String>, DataError> {
        let roles = sqlx::query_scalar::<_, String>(
            "SELECT role_id FROM person_roles WHERE person_id = $1 ORDER BY role_id",
        )
        .bind(person_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(roles)
    }

    async fn tasks_for_person(&self, person_id: &str) -> Result<Vec<WorkTask>, DataError> {
        let rows = sqlx::query_as::<_, WorkTaskRow>(
            r#"
            SELECT id, category, description, process_code, start_date
            FROM work_tasks
            WHERE person_id = $1
            ORDER BY start_date NULLS LAST, id
            "#,
        )
        .bind(person_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(row_to_task).collect())
    }

    async fn tasks_for_roles(&self, role_ids: &[String]) -> Result<Vec<WorkTask>, DataError> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, WorkTaskRow>(
            r#"
            SELECT id, category, description, process_code, start_date
            FROM work_tasks
            WHERE role_id = ANY($1)
            ORDER BY start_date NULLS LAST, id
            "#,
        )
        .bind(role_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(row_to_task).collect())
    }
}
