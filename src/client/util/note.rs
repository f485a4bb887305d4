use uuid::Uuid;

use crate::{
    client::util::api::{delete_json, get_json, send_json, with_query, ApiError, Method},
    model::note::{CreateNoteDto, NoteDto, NoteScopeDto},
};

fn scope_query(path: &str, scope: &NoteScopeDto) -> String {
    with_query(
        path,
        &[
            ("system_name", scope.system_name.as_str()),
            ("error_code", scope.error_code.as_str()),
        ],
    )
}

pub async fn get_notes(scope: &NoteScopeDto) -> Result<Vec<NoteDto>, ApiError> {
    get_json(&scope_query("/api/notes", scope)).await
}

pub async fn add_note(scope: &NoteScopeDto, note: String) -> Result<Vec<NoteDto>, ApiError> {
    let body = CreateNoteDto {
        system_name: scope.system_name.clone(),
        error_code: scope.error_code.clone(),
        note,
    };

    send_json(Method::Post, "/api/notes", &body).await
}

pub async fn delete_note(scope: &NoteScopeDto, note_id: Uuid) -> Result<Vec<NoteDto>, ApiError> {
    delete_json(&scope_query(&format!("/api/notes/{}", note_id), scope)).await
}
