//! HTTP error mapping for dashboard handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::board::{
    domain::{AccessDenied, BoardDomainError, TaskKey},
    ports::TaskTableRepositoryError,
    services::TaskTableError,
};

/// Errors surfaced by dashboard handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A table operation failed.
    #[error(transparent)]
    Table(#[from] TaskTableError),
    /// Request input failed validation before reaching the table.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The request carried no acceptable credential.
    #[error("unauthorized: {0}")]
    Access(#[from] AccessDenied),
    /// The addressed task does not exist.
    #[error("task {0} not found")]
    NotFound(TaskKey),
    /// The request body could not be understood.
    #[error("invalid request: {0}")]
    BadRequest(String),
    /// The page template failed to render.
    #[error("page rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Table(TaskTableError::Domain(_)) | Self::Domain(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Table(TaskTableError::NoParentSelected) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Table(TaskTableError::Unauthorized(_)) | Self::Access(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Table(TaskTableError::ParentNotFound(_)) | Self::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Table(
                TaskTableError::DuplicateKey(_)
                | TaskTableError::Repository(
                    TaskTableRepositoryError::DuplicateKey(_)
                    | TaskTableRepositoryError::KeySpaceExhausted,
                ),
            ) => StatusCode::CONFLICT,
            Self::Table(TaskTableError::Repository(_)) | Self::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        TaskTableError::Repository(TaskTableRepositoryError::KeySpaceExhausted),
        StatusCode::CONFLICT
    )]
    #[case(
        TaskTableError::Domain(BoardDomainError::UnissuedTaskKey { key: 99, issued: 10 }),
        StatusCode::BAD_REQUEST
    )]
    #[case(TaskTableError::NoParentSelected, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(
        TaskTableError::Repository(TaskTableRepositoryError::persistence(std::io::Error::other(
            "disk"
        ))),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn table_errors_map_to_statuses(#[case] error: TaskTableError, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(error).status(), expected);
    }
}
