use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A service note a user left on an error code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NoteDto {
    pub id: Uuid,
    pub note: String,
    pub created_at: NaiveDateTime,
}

/// The (system, error code) pair a note list is scoped to, alongside the session user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct NoteScopeDto {
    pub system_name: String,
    pub error_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateNoteDto {
    pub system_name: String,
    pub error_code: String,
    pub note: String,
}
