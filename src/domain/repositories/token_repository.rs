//! Repository trait for API token authentication.

use crate::domain::DataError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// API token entity with metadata.
///
/// Tokens are stored as HMAC-SHA256 hashes. Each token acts on behalf of one person.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub name: String,
    pub token_hash: String,
    pub person_id: String,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Input data for creating a new token.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub name: String,
    pub token_hash: String,
    pub person_id: String,
    pub permissions: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Repository interface for API token management.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Finds a token by hash, including revoked and expired ones.
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, DataError>;

    /// Updates the last_used timestamp for a token.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), DataError>;

    async fn create_token(&self, new_token: NewApiToken) -> Result<ApiToken, DataError>;

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, DataError>;

    /// Revokes an active token by name. Returns `false` if no active token matched.
    async fn revoke_by_name(&self, name: &str) -> Result<bool, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn token(expires_at: Option<DateTime<Utc>>) -> ApiToken {
        ApiToken {
            id: 1,
            name: "registrar-portal".to_string(),
            token_hash: "abc".to_string(),
            person_id: "0000123".to_string(),
            permissions: vec![],
            created_at: Utc::now(),
            expires_at,
            revoked_at: None,
        }
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        assert!(!token(None).is_expired_at(Utc::now() + Duration::days(3650)));
    }

    #[test]
    fn test_token_expiry_boundary() {
        let now = Utc::now();
        let t = token(Some(now));
        assert!(t.is_expired_at(now));
        assert!(!t.is_expired_at(now - Duration::seconds(1)));
    }
}
