//! Log writing and admin log endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use dioxus_logger::tracing;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        log::{LogEntryDto, LogLevel, LogRequestDto, LogRetentionDto},
    },
    server::{
        config::DEFAULT_LOG_RETENTION_DAYS,
        controller::util::{get_user::require_admin, request::request_context},
        error::Error,
        model::app::AppState,
        service::log::LogService,
    },
};

/// OpenAPI tag for the log endpoints
pub static LOG_TAG: &str = "log";

/// Optional level filter for the log list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogLevelParams {
    /// Only return entries of this level
    pub level: Option<LogLevel>,
}

/// Inclusive time range (UTC) with an optional level filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogRangeParams {
    /// Earliest timestamp to include
    pub start: NaiveDateTime,
    /// Latest timestamp to include
    pub end: NaiveDateTime,
    /// Only return entries of this level
    pub level: Option<LogLevel>,
}

/// Retention window for a manual log purge
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogRetentionParams {
    /// Entries older than this many days are deleted, defaults to 30
    pub days: Option<u32>,
}

/// Record a log entry.
///
/// Always accepted: the entry is echoed to the server console and stored in the background.
/// A body that is not a valid log request is dropped with a debug message.
/// User and page default to the session user and the `Referer` page.
#[utoipa::path(
    post,
    path = "/api/logs",
    tag = LOG_TAG,
    request_body = LogRequestDto,
    responses(
        (status = 202, description = "Log entry accepted for background storage")
    ),
)]
pub async fn create_log(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    request: Result<Json<LogRequestDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::debug!("Dropped malformed log request: {}", rejection.body_text());
            return StatusCode::ACCEPTED;
        }
    };

    let context = request_context(&session, &headers).await;

    LogService::new(&state.db, &state.telemetry).log(&context, request);

    StatusCode::ACCEPTED
}

/// Most recent log entries (up to 1000)
#[utoipa::path(
    get,
    path = "/api/admin/logs",
    tag = LOG_TAG,
    params(LogLevelParams),
    responses(
        (status = 200, description = "Log entries, newest first", body = Vec<LogEntryDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LogLevelParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let logs = LogService::new(&state.db, &state.telemetry)
        .get_logs(params.level)
        .await;

    Ok((StatusCode::OK, Json(logs)))
}

/// Log entries within an inclusive time range
#[utoipa::path(
    get,
    path = "/api/admin/logs/range",
    tag = LOG_TAG,
    params(LogRangeParams),
    responses(
        (status = 200, description = "Log entries in range, newest first", body = Vec<LogEntryDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_logs_by_date_range(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LogRangeParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let logs = LogService::new(&state.db, &state.telemetry)
        .get_logs_by_date_range(params.start, params.end, params.level)
        .await;

    Ok((StatusCode::OK, Json(logs)))
}

/// Delete log entries older than the retention period
#[utoipa::path(
    delete,
    path = "/api/admin/logs",
    tag = LOG_TAG,
    params(LogRetentionParams),
    responses(
        (status = 200, description = "Whether the delete succeeded", body = LogRetentionDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_old_logs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LogRetentionParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let success = LogService::new(&state.db, &state.telemetry)
        .delete_old_logs(params.days.unwrap_or(DEFAULT_LOG_RETENTION_DAYS))
        .await;

    Ok((StatusCode::OK, Json(LogRetentionDto { success })))
}
