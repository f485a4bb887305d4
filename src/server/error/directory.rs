//! Device directory errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Device directory failures, all answered with 502
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Transport or body decoding failure
    #[error("Device directory request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-success status from the directory
    #[error("Device directory answered with status {0}")]
    UpstreamStatus(u16),
    /// Base URL can't be used to build endpoint URLs
    #[error("Device directory URL is not usable: {0}")]
    InvalidUrl(String),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Device directory is unavailable, please try again later".to_string(),
            }),
        )
            .into_response()
    }
}
