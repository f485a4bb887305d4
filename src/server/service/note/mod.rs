//! Note service.
//!
//! Notes are private to a user and scoped to one (system, error code) pair. Every mutation
//! answers with the reloaded note list for the same scope.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::note::NoteDto,
    server::{data::note::NoteRepository, error::Error},
};

/// Per-user notes on an error code
pub struct NoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteService<'a> {
    /// Creates a new instance of [`NoteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notes the user left for the system and error code, newest first
    pub async fn get_notes(
        &self,
        system_name: &str,
        error_code: &str,
        user_id: Uuid,
    ) -> Result<Vec<NoteDto>, Error> {
        let notes = NoteRepository::new(self.db)
            .get_by_scope(system_name, error_code, user_id)
            .await?;

        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    /// Stores the trimmed note and returns the reloaded list.
    ///
    /// Blank input or a missing user is a no-op: nothing is stored and the current list (empty
    /// without a user) is returned.
    ///
    /// # Returns
    /// - `Ok(Vec<NoteDto>)` - Notes for the scope after the insert
    /// - `Err(Error::DbErr)` - Insert or reload failed
    pub async fn add_note(
        &self,
        system_name: &str,
        error_code: &str,
        user_id: Option<Uuid>,
        note: &str,
    ) -> Result<Vec<NoteDto>, Error> {
        let Some(user_id) = user_id else {
            return Ok(Vec::new());
        };

        let note = note.trim();
        if !note.is_empty() {
            let created = NoteRepository::new(self.db)
                .create(system_name, error_code, user_id, note)
                .await?;

            tracing::debug!(
                user_id = %user_id,
                note_id = %created.id,
                "Added note for {}/{}",
                system_name,
                error_code
            );
        }

        self.get_notes(system_name, error_code, user_id).await
    }

    /// Deletes the note if `user_id` owns it and returns the reloaded list.
    ///
    /// A note owned by someone else is left untouched; the call still succeeds.
    pub async fn delete_note(
        &self,
        note_id: Uuid,
        system_name: &str,
        error_code: &str,
        user_id: Uuid,
    ) -> Result<Vec<NoteDto>, Error> {
        let result = NoteRepository::new(self.db)
            .delete_owned(note_id, user_id)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = %user_id, note_id = %note_id, "No owned note to delete");
        }

        self.get_notes(system_name, error_code, user_id).await
    }
}
