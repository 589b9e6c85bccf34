use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::regions::LookupError;
use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Lookup(e) => (StatusCode::NOT_FOUND, e.to_string()),
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
