//! Request validation errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected request input, always answered with 400 and the error text
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Fix step without a title or content
    #[error("Title and content are required")]
    MissingFixStepFields,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
