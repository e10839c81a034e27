//! DTOs for the health check endpoint.

use serde::Deserialize;

/// Query string of `GET /healthcheck`.
#[derive(Debug, Default, Deserialize)]
pub struct HealthQuery {
    pub level: Option<String>,
}

/// Depth of the requested probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    Basic,
    Detailed,
}

impl HealthQuery {
    /// `None` when `level` names something other than `detailed`. The match is
    /// case-sensitive.
    pub fn level(&self) -> Option<HealthLevel> {
        match self.level.as_deref() {
            None | Some("") => Some(HealthLevel::Basic),
            Some("detailed") => Some(HealthLevel::Detailed),
            Some(_) => None,
        }
    }
}
