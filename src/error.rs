use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::DuplicateTitle(_)) => StatusCode::CONFLICT,
            AppError::Store(StoreError::Storage(_)) | AppError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Html(crate::templates::error_page(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
