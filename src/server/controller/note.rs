//! Per-user error code note endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        note::{CreateNoteDto, NoteDto, NoteScopeDto},
    },
    server::{
        controller::util::{failure::record_failure, get_user::require_user},
        error::Error,
        model::app::AppState,
        service::note::NoteService,
    },
};

/// OpenAPI tag for the note endpoints
pub static NOTE_TAG: &str = "note";

/// Get the session user's notes for a system and error code, newest first
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = NOTE_TAG,
    params(NoteScopeDto),
    responses(
        (status = 200, description = "Notes for the system and error code", body = Vec<NoteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(
    State(state): State<AppState>,
    session: Session,
    Query(scope): Query<NoteScopeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&session).await?;

    let notes = NoteService::new(&state.db)
        .get_notes(&scope.system_name, &scope.error_code, user.id)
        .await
        .inspect_err(|e| record_failure(&state, Some(user.id), "load notes", e))?;

    Ok((StatusCode::OK, Json(notes)))
}

/// Add a note; blank notes are ignored. Answers with the reloaded list
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = NOTE_TAG,
    request_body = CreateNoteDto,
    responses(
        (status = 200, description = "Notes after adding", body = Vec<NoteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_note(
    State(state): State<AppState>,
    session: Session,
    Json(note): Json<CreateNoteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&session).await?;

    let notes = NoteService::new(&state.db)
        .add_note(&note.system_name, &note.error_code, Some(user.id), &note.note)
        .await
        .inspect_err(|e| record_failure(&state, Some(user.id), "add note", e))?;

    Ok((StatusCode::OK, Json(notes)))
}

/// Delete one of the session user's notes. Answers with the reloaded list
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = NOTE_TAG,
    params(
        ("id" = Uuid, Path, description = "ID of the note to delete"),
        NoteScopeDto
    ),
    responses(
        (status = 200, description = "Notes after deleting", body = Vec<NoteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_note(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<Uuid>,
    Query(scope): Query<NoteScopeDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_user(&session).await?;

    let notes = NoteService::new(&state.db)
        .delete_note(note_id, &scope.system_name, &scope.error_code, user.id)
        .await
        .inspect_err(|e| record_failure(&state, Some(user.id), "delete note", e))?;

    Ok((StatusCode::OK, Json(notes)))
}
