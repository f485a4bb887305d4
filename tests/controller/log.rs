use axum::{
    extract::{
        rejection::{JsonRejection, MissingJsonContentType},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::LogLevel as EntityLogLevel;
use fixdesk::{
    model::log::{LogEntryDto, LogLevel, LogRequestDto, LogRetentionDto},
    server::{
        controller::log::{
            create_log, delete_old_logs, get_logs, LogLevelParams, LogRetentionParams,
        },
        model::worker::TelemetryJob,
    },
};

use super::*;

/// Expect 202 and a queued log record with the session user
#[tokio::test]
async fn create_log_queues_record() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let (state, mut receiver) = test.app_state();
    let user_id = test.sign_in(false).await?;

    let response = create_log(
        State(state),
        test.session.clone(),
        HeaderMap::new(),
        Ok(Json(LogRequestDto::warning("slow response"))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let Some(TelemetryJob::WriteLog(record)) = receiver.try_recv() else {
        panic!("expected a queued log record");
    };
    assert_eq!(record.level, LogLevel::Warning);
    assert_eq!(record.user_id, Some(user_id));

    Ok(())
}

/// Expect 202 and nothing queued for a body that is not a log request
#[tokio::test]
async fn create_log_drops_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let (state, mut receiver) = test.app_state();

    let response = create_log(
        State(state),
        test.session.clone(),
        HeaderMap::new(),
        Err(JsonRejection::from(MissingJsonContentType::default())),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(receiver.try_recv().is_none());

    Ok(())
}

/// Expect only entries of the requested level
#[tokio::test]
async fn get_logs_filters_level() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(true).await?;
    test.log()
        .insert_log(EntityLogLevel::Error, "disk full", factory::minutes_ago(2))
        .await?;
    test.log()
        .insert_log(EntityLogLevel::Info, "started", factory::minutes_ago(1))
        .await?;

    let response = get_logs(
        State(state),
        test.session.clone(),
        Query(LogLevelParams {
            level: Some(LogLevel::Error),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let logs: Vec<LogEntryDto> = json_body(response).await?;
    let messages: Vec<&str> = logs.iter().map(|l| l.message.as_str()).collect();
    assert_eq!(messages, vec!["disk full"]);

    Ok(())
}

/// Expect success and only entries older than the retention to be removed
#[tokio::test]
async fn delete_old_logs_applies_retention() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(true).await?;
    test.log()
        .insert_log(EntityLogLevel::Info, "ancient", factory::days_ago(31))
        .await?;
    test.log()
        .insert_log(EntityLogLevel::Info, "recent", factory::days_ago(29))
        .await?;

    let response = delete_old_logs(
        State(state.clone()),
        test.session.clone(),
        Query(LogRetentionParams::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let result: LogRetentionDto = json_body(response).await?;
    assert!(result.success);

    let remaining = get_logs(
        State(state),
        test.session.clone(),
        Query(LogLevelParams::default()),
    )
    .await
    .into_response();
    let logs: Vec<LogEntryDto> = json_body(remaining).await?;
    let messages: Vec<&str> = logs.iter().map(|l| l.message.as_str()).collect();
    assert_eq!(messages, vec!["recent"]);

    Ok(())
}

/// Expect `success: false` when the delete fails
#[tokio::test]
async fn delete_old_logs_reports_failure() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(true).await?;

    let response = delete_old_logs(
        State(state),
        test.session.clone(),
        Query(LogRetentionParams { days: Some(7) }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let result: LogRetentionDto = json_body(response).await?;
    assert!(!result.success);

    Ok(())
}
