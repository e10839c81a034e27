//! Failure translation and entity-to-DTO mapping shared by every handler.
//!
//! Each handler owns one [`Endpoint`] describing the resource it serves. The
//! endpoint turns collaborator errors into HTTP errors with a single exhaustive
//! match and logs the original detail.

use axum::Json;
use serde_json::json;

use crate::domain::DataError;
use crate::error::AppError;

/// Status used for collaborator errors that carry no more specific meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    BadRequest,
    Internal,
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    resource: &'static str,
    fallback: Fallback,
}

impl Endpoint {
    pub const fn new(resource: &'static str) -> Self {
        Self {
            resource,
            fallback: Fallback::BadRequest,
        }
    }

    pub const fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Maps a collaborator failure to the response the client sees.
    ///
    /// | Error | Status |
    /// |---|---|
    /// | `SessionExpired` | 401, detail appended to the message |
    /// | `PermissionDenied` | 403 |
    /// | `InvalidArgument` | 400, message passed through |
    /// | anything else | the endpoint fallback (400 or 500) |
    pub fn fail(&self, err: DataError) -> AppError {
        let resource = self.resource;
        let app_error = match &err {
            DataError::SessionExpired(detail) => AppError::unauthorized(
                format!("Session has expired while retrieving {resource}: {detail}"),
                json!({}),
            ),
            DataError::PermissionDenied(_) => AppError::forbidden(
                format!("Permission denied to retrieve {resource}"),
                json!({}),
            ),
            DataError::InvalidArgument(message) => {
                AppError::bad_request(message.clone(), json!({"resource": resource}))
            }
            DataError::Database(_) | DataError::Cache(_) => match self.fallback {
                Fallback::BadRequest => {
                    AppError::bad_request(format!("Error retrieving {resource}"), json!({}))
                }
                Fallback::Internal => {
                    AppError::internal(format!("Error retrieving {resource}"), json!({}))
                }
            },
        };

        let status = app_error.status();
        tracing::error!(
            resource,
            kind = err.kind(),
            status = status.as_u16(),
            error = %err,
            "Request failed"
        );

        app_error
    }

    /// Logs an error raised by the handler itself (bad input, disabled feature)
    /// before the collaborator is called.
    pub fn reject(&self, err: AppError) -> AppError {
        let status = err.status();
        tracing::warn!(
            resource = self.resource,
            status = status.as_u16(),
            message = err.message(),
            "Request rejected"
        );
        err
    }

    /// Maps every entity of a successful read to its DTO, in order.
    pub fn list<E, D>(&self, result: Result<Vec<E>, DataError>) -> Result<Json<Vec<D>>, AppError>
    where
        D: From<E>,
    {
        result
            .map(|entities| Json(adapt_all(entities, D::from)))
            .map_err(|e| self.fail(e))
    }
}

/// Applies `adapter` to each entity exactly once, preserving order.
pub fn adapt_all<E, D>(entities: Vec<E>, adapter: impl Fn(E) -> D) -> Vec<D> {
    entities.into_iter().map(adapter).collect()
}
