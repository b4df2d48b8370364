use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("invalid seat selection")]
    InvalidSelection,
    #[error("one or more seats are no longer available")]
    SeatUnavailable,
    #[error("you do not have access to this booking")]
    Forbidden,
    #[error("you have already reviewed this movie")]
    DuplicateReview,
    #[error(transparent)]
    Storage(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidSelection | AppError::DuplicateReview => StatusCode::BAD_REQUEST,
            AppError::SeatUnavailable => StatusCode::CONFLICT,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Storage(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                "Something went wrong on our end. Please try again.".to_string()
            }
            AppError::Other(err) => {
                tracing::error!(error = %err, "internal error");
                "Something went wrong on our end. Please try again.".to_string()
            }
            other => other.to_string(),
        };
        (status, Html(crate::templates::error_page(&message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Distinguishes a unique-index violation from other storage failures so
/// write paths can surface the right domain error. SQLite reports these
/// as "UNIQUE constraint failed: table.column, ...".
pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let text = err.to_string();
    text.contains("UNIQUE constraint failed") || text.contains("unique constraint")
}
