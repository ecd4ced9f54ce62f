use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored rows reference something that does not exist, e.g. an item
    /// whose category id has no entry in `types`.
    #[error("Data integrity error: {0}")]
    Integrity(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Clients of the item endpoint expect a bare `false`, not an error object.
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, Json(false)).into_response(),
            AppError::Database(_) | AppError::Integrity(_) => {
                tracing::error!(error = %self, "Request failed");
                let body = Json(json!({
                    "error": self.to_string()
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
