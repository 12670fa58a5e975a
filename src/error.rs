//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    /// Data routes hit while the process runs without DB_* configuration.
    #[error("database not configured (set DB_HOST, DB_USER, DB_NAME)")]
    DbNotConfigured,
}

/// The flat body every failed request gets: `{"error": message}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Per-request failures become a 500 with the store's own message;
        // none of them take the process down.
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.body())).into_response()
    }
}
