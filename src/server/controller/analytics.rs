//! Analytics tracking and admin report endpoints.

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
        analytics::{AnalyticsEventDto, ErrorCodeSearchCountDto, PageViewCountDto, TrackEventDto},
        api::ErrorDto,
    },
    server::{
        controller::util::{get_user::require_admin, request::request_context},
        error::Error,
        model::{app::AppState, session::device::SessionDeviceIdentity},
        service::analytics::{AnalyticsService, DEFAULT_TOP_LIMIT},
    },
};

/// OpenAPI tag for the analytics endpoints
pub static ANALYTICS_TAG: &str = "analytics";

/// Optional inclusive time range (UTC)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeRangeParams {
    /// Earliest timestamp to include
    pub start: Option<NaiveDateTime>,
    /// Latest timestamp to include
    pub end: Option<NaiveDateTime>,
}

/// Size of a top-N report
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopListParams {
    /// Maximum number of entries, defaults to 10
    pub limit: Option<usize>,
}

/// Record an analytics event.
///
/// Always accepted: the write happens in the background and failures are never reported.
/// A body that is not a valid event is dropped with a debug message.
/// User and path default to the session user and the `Referer` page.
#[utoipa::path(
    post,
    path = "/api/analytics/events",
    tag = ANALYTICS_TAG,
    request_body = TrackEventDto,
    responses(
        (status = 202, description = "Event accepted for background storage")
    ),
)]
pub async fn track_event(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    event: Result<Json<TrackEventDto>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match event {
        Ok(event) => event,
        Err(rejection) => {
            tracing::debug!("Dropped malformed analytics event: {}", rejection.body_text());
            return StatusCode::ACCEPTED;
        }
    };

    let context = request_context(&session, &headers).await;
    let device = SessionDeviceIdentity::new(session);

    AnalyticsService::new(&state.db, &state.telemetry)
        .track_event(&device, &context, event)
        .await;

    StatusCode::ACCEPTED
}

/// Most recent analytics events (up to 5000) within the optional range
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = ANALYTICS_TAG,
    params(TimeRangeParams),
    responses(
        (status = 200, description = "Analytics events, newest first", body = Vec<AnalyticsEventDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<TimeRangeParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let events = AnalyticsService::new(&state.db, &state.telemetry)
        .get_analytics(range.start, range.end)
        .await;

    Ok((StatusCode::OK, Json(events)))
}

/// Event counts per event type within the optional range
#[utoipa::path(
    get,
    path = "/api/admin/analytics/summary",
    tag = ANALYTICS_TAG,
    params(TimeRangeParams),
    responses(
        (status = 200, description = "Counts keyed by event type", body = std::collections::BTreeMap<String, u64>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_analytics_summary(
    State(state): State<AppState>,
    session: Session,
    Query(range): Query<TimeRangeParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let summary = AnalyticsService::new(&state.db, &state.telemetry)
        .get_analytics_summary(range.start, range.end)
        .await;

    Ok((StatusCode::OK, Json(summary)))
}

/// Most searched (error code, system) pairs
#[utoipa::path(
    get,
    path = "/api/admin/analytics/top-searches",
    tag = ANALYTICS_TAG,
    params(TopListParams),
    responses(
        (status = 200, description = "Most searched error codes", body = Vec<ErrorCodeSearchCountDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_most_searched_error_codes(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TopListParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let top = AnalyticsService::new(&state.db, &state.telemetry)
        .get_most_searched_error_codes(params.limit.unwrap_or(DEFAULT_TOP_LIMIT))
        .await;

    Ok((StatusCode::OK, Json(top)))
}

/// Most viewed pages
#[utoipa::path(
    get,
    path = "/api/admin/analytics/top-pages",
    tag = ANALYTICS_TAG,
    params(TopListParams),
    responses(
        (status = 200, description = "Most viewed pages", body = Vec<PageViewCountDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_most_viewed_pages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<TopListParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&session).await?;

    let top = AnalyticsService::new(&state.db, &state.telemetry)
        .get_most_viewed_pages(params.limit.unwrap_or(DEFAULT_TOP_LIMIT))
        .await;

    Ok((StatusCode::OK, Json(top)))
}
