//! Classification of SQLx errors into [`DataError`] kinds.

use crate::domain::DataError;

impl From<sqlx::Error> for DataError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && let Some(code) = db_err.code()
            && let Some(classified) = classify_sqlstate(&code, db_err.message())
        {
            return classified;
        }

        DataError::Database(e.to_string())
    }
}

/// Maps a PostgreSQL SQLSTATE to a session or permission failure.
///
/// Class `28` covers rejected credentials (the data-layer session is no longer
/// valid); `42501` is `insufficient_privilege`. Everything else is left to the
/// generic database kind.
fn classify_sqlstate(code: &str, message: &str) -> Option<DataError> {
    if code.starts_with("28") {
        return Some(DataError::SessionExpired(message.to_string()));
    }
    if code == "42501" {
        return Some(DataError::PermissionDenied(message.to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_authorization_is_session_expiry() {
        assert_eq!(
            classify_sqlstate("28P01", "password authentication failed"),
            Some(DataError::SessionExpired(
                "password authentication failed".to_string()
            ))
        );
        assert!(matches!(
            classify_sqlstate("28000", "role is not permitted to log in"),
            Some(DataError::SessionExpired(_))
        ));
    }

    #[test]
    fn test_insufficient_privilege_is_permission_denied() {
        assert!(matches!(
            classify_sqlstate("42501", "permission denied for table schools"),
            Some(DataError::PermissionDenied(_))
        ));
    }

    #[test]
    fn test_other_codes_are_not_classified() {
        assert_eq!(classify_sqlstate("23505", "duplicate key"), None);
        assert_eq!(classify_sqlstate("42P01", "relation does not exist"), None);
    }

    #[test]
    fn test_non_database_errors_become_database_kind() {
        let err: DataError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DataError::Database(_)));
    }
}
