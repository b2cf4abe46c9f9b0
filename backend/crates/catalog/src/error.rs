//! Catalog Error Types
//!
//! This module provides catalog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
///
/// These map to the HTTP surface of the service: validation failures are
/// client errors, empty query results are a distinct "no result" response,
/// and store failures are server errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Category or difficulty missing/empty in the request
    #[error("Category and difficulty are required")]
    MissingFields,

    /// No approved course matched the requested category and difficulty
    #[error("No recommended course found")]
    CourseNotFound,

    /// The collection holds no category values at all
    #[error("No categories found")]
    NoCategories,

    /// Course store error
    #[error("Course store error: {0}")]
    Store(#[from] mongodb::error::Error),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::MissingFields => ErrorKind::BadRequest,
            CatalogError::CourseNotFound | CatalogError::NoCategories => ErrorKind::NotFound,
            CatalogError::Store(e) => store_error_kind(e),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Store(e) => {
                tracing::error!(error = %e, "Course store error");
            }
            CatalogError::MissingFields => {
                tracing::warn!("Category or difficulty not provided");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

/// Connection-level store failures are 503, everything else is 500.
fn store_error_kind(err: &mongodb::error::Error) -> ErrorKind {
    use mongodb::error::ErrorKind as MongoErrorKind;

    match err.kind.as_ref() {
        MongoErrorKind::ServerSelection { .. } | MongoErrorKind::Io(_) => {
            ErrorKind::ServiceUnavailable
        }
        _ => ErrorKind::InternalServerError,
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Store(e) => AppError::from(e),
            other => {
                let kind = other.kind();
                let message = other.to_string();
                AppError::new(kind, message)
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = match &self {
            CatalogError::MissingFields => {
                serde_json::json!({ "error": "Category and difficulty are required" })
            }
            CatalogError::CourseNotFound => {
                serde_json::json!({ "message": "No recommended course found." })
            }
            CatalogError::NoCategories => {
                serde_json::json!({ "message": "No categories found." })
            }
            // Don't leak store internals to the client
            CatalogError::Store(_) => {
                serde_json::json!({ "error": "Course store unavailable" })
            }
        };
        (status, Json(body)).into_response()
    }
}
