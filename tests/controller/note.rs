use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fixdesk::{
    model::{
        log::LogLevel,
        note::{CreateNoteDto, NoteDto, NoteScopeDto},
    },
    server::{
        controller::note::{add_note, delete_note, get_notes},
        model::worker::TelemetryJob,
    },
};
use fixdesk_test_utils::constant::{TEST_ERROR_CODE, TEST_SYSTEM_NAME};
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::*;

fn scope() -> NoteScopeDto {
    NoteScopeDto {
        system_name: TEST_SYSTEM_NAME.to_string(),
        error_code: TEST_ERROR_CODE.to_string(),
    }
}

/// Expect 404 when nobody is signed in
#[tokio::test]
async fn get_notes_requires_user() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();

    let response = get_notes(State(state), test.session.clone(), Query(scope()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect only the signed-in user's notes for the scope
#[tokio::test]
async fn get_notes_scopes_to_user() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    let user_id = test.sign_in(false).await?;
    test.note()
        .insert_note(TEST_SYSTEM_NAME, TEST_ERROR_CODE, user_id, "mine", factory::minutes_ago(2))
        .await?;
    test.note()
        .insert_note(TEST_SYSTEM_NAME, TEST_ERROR_CODE, Uuid::new_v4(), "theirs", factory::minutes_ago(1))
        .await?;
    test.note()
        .insert_note(TEST_SYSTEM_NAME, "E999", user_id, "other code", factory::minutes_ago(1))
        .await?;

    let response = get_notes(State(state), test.session.clone(), Query(scope()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let notes: Vec<NoteDto> = json_body(response).await?;
    let texts: Vec<&str> = notes.iter().map(|n| n.note.as_str()).collect();
    assert_eq!(texts, vec!["mine"]);

    Ok(())
}

/// Expect the trimmed note at the top of the reloaded list
#[tokio::test]
async fn add_note_returns_reloaded_list() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    let user_id = test.sign_in(false).await?;
    test.note()
        .insert_note(TEST_SYSTEM_NAME, TEST_ERROR_CODE, user_id, "older", factory::minutes_ago(5))
        .await?;

    let body = CreateNoteDto {
        system_name: TEST_SYSTEM_NAME.to_string(),
        error_code: TEST_ERROR_CODE.to_string(),
        note: "  replaced the fuse  ".to_string(),
    };
    let response = add_note(State(state), test.session.clone(), Json(body))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let notes: Vec<NoteDto> = json_body(response).await?;
    let texts: Vec<&str> = notes.iter().map(|n| n.note.as_str()).collect();
    assert_eq!(texts, vec!["replaced the fuse", "older"]);

    Ok(())
}

/// Expect a failed insert to answer 500 and queue an error entry with its trace
#[tokio::test]
async fn add_note_failure_is_logged() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let (state, mut receiver) = test.app_state();
    let user_id = test.sign_in(false).await?;

    let body = CreateNoteDto {
        system_name: TEST_SYSTEM_NAME.to_string(),
        error_code: TEST_ERROR_CODE.to_string(),
        note: "replaced the fuse".to_string(),
    };
    let response = add_note(State(state), test.session.clone(), Json(body))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let Some(TelemetryJob::WriteLog(record)) = receiver.try_recv() else {
        panic!("expected a queued log record");
    };
    assert_eq!(record.level, LogLevel::Error);
    assert_eq!(record.message, "Failed to add note");
    assert_eq!(record.user_id, Some(user_id));
    assert!(record.stack_trace.is_some());

    Ok(())
}

/// Expect a request without a user to leave the log untouched
#[tokio::test]
async fn missing_user_is_not_logged() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, mut receiver) = test.app_state();

    let response = get_notes(State(state), test.session.clone(), Query(scope()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(receiver.try_recv().is_none());

    Ok(())
}

/// Expect another user's note to survive a delete attempt
#[tokio::test]
async fn delete_note_keeps_foreign_note() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(false).await?;
    let note = test
        .note()
        .insert_note(TEST_SYSTEM_NAME, TEST_ERROR_CODE, Uuid::new_v4(), "theirs", factory::minutes_ago(1))
        .await?;

    let response = delete_note(
        State(state),
        test.session.clone(),
        Path(note.id),
        Query(scope()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = entity::prelude::ErrorNote::find_by_id(note.id)
        .one(&test.db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Expect the owner's delete to remove the note from the returned list
#[tokio::test]
async fn delete_note_removes_own_note() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    let user_id = test.sign_in(false).await?;
    let note = test
        .note()
        .insert_note(TEST_SYSTEM_NAME, TEST_ERROR_CODE, user_id, "mine", factory::minutes_ago(1))
        .await?;

    let response = delete_note(
        State(state),
        test.session.clone(),
        Path(note.id),
        Query(scope()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let notes: Vec<NoteDto> = json_body(response).await?;
    assert!(notes.is_empty());

    Ok(())
}
