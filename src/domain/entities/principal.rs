//! The authenticated caller.

/// Permission code allowing a caller to read any person's work tasks.
pub const VIEW_ANY_PERSON_WORK_TASKS: &str = "VIEW.ANY.PERSON.WORK.TASKS";

/// Identity attached to a request once its bearer token has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub person_id: String,
    pub permissions: Vec<String>,
}

impl Principal {
    pub fn new(person_id: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            person_id: person_id.into(),
            permissions,
        }
    }

    /// Permission codes are compared case-insensitively.
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.eq_ignore_ascii_case(code))
    }

    /// Whether this caller may act on data belonging to `person_id`.
    pub fn is_self(&self, person_id: &str) -> bool {
        self.person_id == person_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_permission_ignores_case() {
        let principal = Principal::new(
            "0000123",
            vec!["view.any.person.work.tasks".to_string()],
        );
        assert!(principal.has_permission(VIEW_ANY_PERSON_WORK_TASKS));
        assert!(!principal.has_permission("CLEAR.CACHE"));
    }

    #[test]
    fn test_is_self() {
        let principal = Principal::new("0000123", vec![]);
        assert!(principal.is_self("0000123"));
        assert!(!principal.is_self("0000124"));
    }
}
