//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Session and access token failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user signed in, answered with 404
    #[error("User ID is not present in session")]
    UserNotInSession,
    /// Signed-in user lacks the admin role, answered with 403
    #[error("User {0} is not an administrator")]
    NotAdmin(Uuid),
    /// Access token failed validation, answered with 401
    #[error("Access token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    fn response(status: StatusCode, message: &str) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                Self::response(StatusCode::NOT_FOUND, "User not found")
            }
            Self::NotAdmin(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::response(StatusCode::FORBIDDEN, "Administrator access required")
            }
            Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                Self::response(StatusCode::UNAUTHORIZED, "Invalid or expired access token")
            }
        }
    }
}
