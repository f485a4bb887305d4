//! Requests behind the admin pages.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{
    client::util::api::{delete_json, get_json, send_json, with_query, ApiError, Method},
    model::{
        analytics::{AnalyticsEventDto, ErrorCodeSearchCountDto, PageViewCountDto},
        fix_step::{CreateFixStepDto, FixStepDto},
        log::{LogEntryDto, LogLevel, LogRetentionDto},
    },
};

pub async fn get_fix_steps() -> Result<Vec<FixStepDto>, ApiError> {
    get_json("/api/admin/fix-steps").await
}

pub async fn create_fix_step(fix_step: &CreateFixStepDto) -> Result<Vec<FixStepDto>, ApiError> {
    send_json(Method::Post, "/api/admin/fix-steps", fix_step).await
}

pub async fn delete_fix_step(fix_step_id: Uuid) -> Result<Vec<FixStepDto>, ApiError> {
    delete_json(&format!("/api/admin/fix-steps/{}", fix_step_id)).await
}

pub async fn get_logs(level: Option<LogLevel>) -> Result<Vec<LogEntryDto>, ApiError> {
    let url = match level {
        Some(level) => with_query("/api/admin/logs", &[("level", level.as_str())]),
        None => "/api/admin/logs".to_string(),
    };

    get_json(&url).await
}

pub async fn delete_old_logs(days: u32) -> Result<LogRetentionDto, ApiError> {
    let days = days.to_string();

    delete_json(&with_query("/api/admin/logs", &[("days", days.as_str())])).await
}

/// `start`/`end` are `YYYY-MM-DDTHH:MM:SS` timestamps in UTC
fn range_query(path: &str, start: Option<&str>, end: Option<&str>) -> String {
    let pairs: Vec<(&str, &str)> = [("start", start), ("end", end)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect();

    with_query(path, &pairs)
}

pub async fn get_analytics(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Vec<AnalyticsEventDto>, ApiError> {
    get_json(&range_query("/api/admin/analytics", start, end)).await
}

pub async fn get_analytics_summary(
    start: Option<&str>,
    end: Option<&str>,
) -> Result<BTreeMap<String, u64>, ApiError> {
    get_json(&range_query("/api/admin/analytics/summary", start, end)).await
}

pub async fn get_most_searched_error_codes() -> Result<Vec<ErrorCodeSearchCountDto>, ApiError> {
    get_json("/api/admin/analytics/top-searches").await
}

pub async fn get_most_viewed_pages() -> Result<Vec<PageViewCountDto>, ApiError> {
    get_json("/api/admin/analytics/top-pages").await
}
