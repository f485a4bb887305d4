//! Error types for the fixdesk server.
//!
//! Domain errors (authentication, configuration, validation, device directory) each live in
//! their own module with an `IntoResponse` mapping. The top-level [`Error`] aggregates them
//! together with library errors so handlers and services can use `?` throughout.

pub mod auth;
pub mod config;
pub mod directory;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, directory::DirectoryError,
        validation::ValidationError,
    },
};

/// Main error type for the fixdesk server.
///
/// Uses `#[from]` conversions so the `?` operator lifts domain and library errors into it.
/// The `IntoResponse` implementation delegates to the domain errors' own mappings and treats
/// everything else as an internal server error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session user, invalid token, missing admin role).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request validation error.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Device directory request failure.
    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 401 Unauthorized - Invalid or expired access token
/// - 403 Forbidden - Admin route requested by a non-admin user
/// - 404 Not Found - No user in session
/// - 502 Bad Gateway - Device directory unavailable
/// - 500 Internal Server Error - Everything else (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::DirectoryError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
