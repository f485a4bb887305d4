//! End-to-end telemetry: handler, queue, worker and database.

use std::time::Duration;

use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use fixdesk::{
    model::analytics::TrackEventDto,
    server::{
        controller::analytics::track_event,
        worker::{TelemetryJobHandler, TelemetryWorker, WorkerPoolConfig},
    },
};
use fixdesk_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::util::TestSetupExt;

/// Expect a tracked event to be stored by a running worker
#[tokio::test]
async fn tracked_event_is_stored() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, receiver) = test.app_state();
    let worker = TelemetryWorker::new(
        WorkerPoolConfig::new(1),
        receiver,
        TelemetryJobHandler::new(test.db.clone()),
    );
    worker.start().await.unwrap();

    let response = track_event(
        State(state),
        test.session.clone(),
        HeaderMap::new(),
        Ok(Json(TrackEventDto::page_view(Some("/".to_string())))),
    )
    .await
    .into_response();
    assert!(response.status().is_success());

    let mut stored = 0;
    for _ in 0..50 {
        stored = entity::prelude::AppAnalytics::find().count(&test.db).await?;
        if stored > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(stored, 1);
    worker.stop().await.unwrap();

    Ok(())
}
