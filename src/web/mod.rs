//! Web page server
//!
//! Serves the tables as an HTML page with forms for every action, plus a
//! small JSON view of the render models.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::{AppState, FormInteraction};

use crate::core::TableError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum WebError {
    Table(TableError),
}

impl From<TableError> for WebError {
    fn from(err: TableError) -> Self {
        WebError::Table(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            WebError::Table(TableError::UnknownTable(id)) => (
                StatusCode::NOT_FOUND,
                format!("Table '{}' not found", id),
                "not_found",
            ),
            WebError::Table(TableError::UnknownSortKey(key)) => (
                StatusCode::NOT_FOUND,
                format!("Unknown sort key '{}'", key),
                "not_found",
            ),
            WebError::Table(err @ TableError::Rejected(_)) => {
                (StatusCode::CONFLICT, err.to_string(), "rejected")
            }
            WebError::Table(err @ TableError::Input(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), "input_error")
            }
            WebError::Table(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                err.to_string(),
                "internal_error",
            ),
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
