//! PostgreSQL implementation of the reference data repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::DataError;
use crate::domain::entities::{
    BoxCode, ConvenienceFee, Denomination, Division, InstitutionRole, MiscellaneousText,
    OfficeCode, OfficeType, School,
};
use crate::domain::repositories::ReferenceDataRepository;

/// PostgreSQL repository for the institution's code tables.
///
/// Each list is ordered by its key so repeated reads are stable.
pub struct PgReferenceDataRepository {
    pool: Arc<PgPool>,
}

impl PgReferenceDataRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Reads a two-column `(code, description)` table.
    async fn code_table(&self, sql: &'static str) -> Result<Vec<(String, String)>, DataError> {
        let rows = sqlx::query_as::<_, (String, String)>(sql)
            .fetch_all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl ReferenceDataRepository for PgReferenceDataRepository {
    async fn denominations(&self) -> Result<Vec<Denomination>, DataError> {
        let rows = self
            .code_table("SELECT code, description FROM denominations ORDER BY code")
            .await?;

        Ok(rows
            .into_iter()
            .map(|(code, description)| Denomination { code, description })
            .collect())
    }

    async fn divisions(&self) -> Result<Vec<Division>, DataError> {
        let rows = self
            .code_table("SELECT code, description FROM divisions ORDER BY code")
            .await?;

        Ok(rows
            .into_iter()
            .map(|(code, description)| Division { code, description })
            .collect())
    }

    async fn schools(&self) -> Result<Vec<School>, DataError> {
        let rows = sqlx::query_as::<_, (String, String, Vec<String>)>(
            r#"
            SELECT code, description, academic_levels
            FROM schools
            ORDER BY code
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(code, description, academic_levels)| School {
                code,
                description,
                academic_levels,
            })
            .collect())
    }

    async fn office_codes(&self) -> Result<Vec<OfficeCode>, DataError> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            r#"
            SELECT code, description, office_type
            FROM office_codes
            ORDER BY code
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|(code, description, office_type)| {
                let office_type = office_type
                    .parse::<OfficeType>()
                    .map_err(|e| DataError::Database(format!("office code {code}: {e}")))?;
                Ok(OfficeCode {
                    code,
                    description,
                    office_type,
                })
            })
            .collect()
    }

    async fn convenience_fees(&self) -> Result<Vec<ConvenienceFee>, DataError> {
        let rows = self
            .code_table("SELECT code, description FROM convenience_fees ORDER BY code")
            .await?;

        Ok(rows
            .into_iter()
            .map(|(code, description)| ConvenienceFee { code, description })
            .collect())
    }

    async fn miscellaneous_text(&self) -> Result<Vec<MiscellaneousText>, DataError> {
        let rows = self
            .code_table("SELECT id, text FROM miscellaneous_text ORDER BY id")
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, text)| MiscellaneousText { id, text })
            .collect())
    }

    async fn box_codes(&self) -> Result<Vec<BoxCode>, DataError> {
        let rows = sqlx::query_as::<_, (String, String, String)>(
            r#"
            SELECT code, description, tax_code
            FROM tax_form_box_codes
            ORDER BY code
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(code, description, tax_code)| BoxCode {
                code,
                description,
                tax_code,
            })
            .collect())
    }

    async fn institution_roles(&self) -> Result<Vec<InstitutionRole>, DataError> {
        let titles = sqlx::query_scalar::<_, String>("SELECT title FROM institution_roles ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(titles
            .into_iter()
            .map(|title| InstitutionRole { title })
            .collect())
    }

    async fn ping(&self) -> Result<(), DataError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
