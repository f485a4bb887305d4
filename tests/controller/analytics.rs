use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, MissingJsonContentType},
        Query, State,
    },
    http::{header::REFERER, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::EventType as EntityEventType;
use fixdesk::{
    model::analytics::{ErrorCodeSearchCountDto, PageViewCountDto, TrackEventDto},
    server::{
        controller::analytics::{
            get_analytics_summary, get_most_searched_error_codes, get_most_viewed_pages,
            track_event, TimeRangeParams, TopListParams,
        },
        model::worker::TelemetryJob,
    },
};

use super::*;

mod track_event {
    use super::*;

    /// Expect 202 and a queued event resolved from the session and the Referer page
    #[tokio::test]
    async fn queues_event_with_context() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, mut receiver) = test.app_state();
        let user_id = test.sign_in(false).await?;
        let mut headers = HeaderMap::new();
        headers.insert(
            REFERER,
            HeaderValue::from_static("https://fixdesk.example/admin/logs"),
        );

        let response = track_event(
            State(state),
            test.session.clone(),
            headers,
            Ok(Json(TrackEventDto::error_code_search("E7", "Heat pump"))),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let Some(TelemetryJob::TrackEvent(event)) = receiver.try_recv() else {
            panic!("expected a queued analytics event");
        };
        assert_eq!(event.user_id, Some(user_id));
        assert_eq!(event.path.as_deref(), Some("/admin/logs"));

        Ok(())
    }

    /// Expect 202 even when the telemetry queue is gone
    #[tokio::test]
    async fn accepted_when_queue_closed() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, receiver) = test.app_state();
        drop(receiver);

        let response = track_event(
            State(state),
            test.session.clone(),
            HeaderMap::new(),
            Ok(Json(TrackEventDto::page_view(None))),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::ACCEPTED);

        Ok(())
    }

    /// Expect 202 and nothing queued for a body that is not an event
    #[tokio::test]
    async fn malformed_body_is_dropped() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, mut receiver) = test.app_state();

        let response = track_event(
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
}

mod reports {
    use super::*;

    /// Expect 403 for a signed-in user without the admin role
    #[tokio::test]
    async fn summary_requires_admin() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let (state, _receiver) = test.app_state();
        test.sign_in(false).await?;

        let response = get_analytics_summary(
            State(state),
            test.session.clone(),
            Query(TimeRangeParams::default()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Expect counts keyed by event type
    #[tokio::test]
    async fn summary_counts_by_type() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let (state, _receiver) = test.app_state();
        test.sign_in(true).await?;
        for minutes in 1..=3 {
            test.analytics()
                .insert_page_view(Some("/"), factory::minutes_ago(minutes))
                .await?;
        }
        test.analytics()
            .insert_error_code_search("E7", "Heat pump", factory::minutes_ago(1))
            .await?;
        test.analytics()
            .insert_event(EntityEventType::ButtonClick, None, None, factory::minutes_ago(1))
            .await?;

        let response = get_analytics_summary(
            State(state),
            test.session.clone(),
            Query(TimeRangeParams::default()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let summary: BTreeMap<String, u64> = json_body(response).await?;
        let expected = BTreeMap::from([
            ("page_view".to_string(), 3),
            ("error_code_search".to_string(), 1),
            ("button_click".to_string(), 1),
        ]);
        assert_eq!(summary, expected);

        Ok(())
    }

    /// Expect (code, system) pairs sorted by search count
    #[tokio::test]
    async fn top_searches_sorted() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let (state, _receiver) = test.app_state();
        test.sign_in(true).await?;
        test.analytics()
            .insert_error_code_search("E1", "Boiler", factory::minutes_ago(3))
            .await?;
        test.analytics()
            .insert_error_code_search("E7", "Heat pump", factory::minutes_ago(2))
            .await?;
        test.analytics()
            .insert_error_code_search("E7", "Heat pump", factory::minutes_ago(1))
            .await?;

        let response = get_most_searched_error_codes(
            State(state),
            test.session.clone(),
            Query(TopListParams::default()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let top: Vec<ErrorCodeSearchCountDto> = json_body(response).await?;
        let pairs: Vec<(&str, &str, u64)> = top
            .iter()
            .map(|t| (t.code.as_str(), t.system.as_str(), t.count))
            .collect();
        assert_eq!(pairs, vec![("E7", "Heat pump", 2), ("E1", "Boiler", 1)]);

        Ok(())
    }

    /// Expect the limit to truncate the page list
    #[tokio::test]
    async fn top_pages_limited() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let (state, _receiver) = test.app_state();
        test.sign_in(true).await?;
        for (path, minutes) in [("/a", 4), ("/b", 3), ("/b", 2), ("/c", 1)] {
            test.analytics()
                .insert_page_view(Some(path), factory::minutes_ago(minutes))
                .await?;
        }

        let response = get_most_viewed_pages(
            State(state),
            test.session.clone(),
            Query(TopListParams { limit: Some(1) }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let top: Vec<PageViewCountDto> = json_body(response).await?;
        assert_eq!(
            top,
            vec![PageViewCountDto {
                path: "/b".to_string(),
                count: 2
            }]
        );

        Ok(())
    }
}
