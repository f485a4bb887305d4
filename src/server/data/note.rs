//! `error_notes` repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::db::NoteModel;

/// Queries, inserts and owner-scoped deletes for notes
pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    /// Creates a new instance of [`NoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Notes for the exact (system, error code, user) triple, newest first
    pub async fn get_by_scope(
        &self,
        system_name: &str,
        error_code: &str,
        user_id: Uuid,
    ) -> Result<Vec<NoteModel>, DbErr> {
        entity::prelude::ErrorNote::find()
            .filter(entity::error_note::Column::SystemName.eq(system_name))
            .filter(entity::error_note::Column::ErrorCode.eq(error_code))
            .filter(entity::error_note::Column::UserId.eq(user_id))
            .order_by_desc(entity::error_note::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Inserts a note with a new id, created now
    pub async fn create(
        &self,
        system_name: &str,
        error_code: &str,
        user_id: Uuid,
        note: &str,
    ) -> Result<NoteModel, DbErr> {
        entity::prelude::ErrorNote::insert(entity::error_note::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            system_name: ActiveValue::Set(system_name.to_string()),
            error_code: ActiveValue::Set(error_code.to_string()),
            user_id: ActiveValue::Set(user_id),
            note: ActiveValue::Set(note.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Deletes a note only when it is owned by `user_id`
    ///
    /// Returns OK regardless of the note existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_owned(&self, note_id: Uuid, user_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::ErrorNote::delete_many()
            .filter(entity::error_note::Column::Id.eq(note_id))
            .filter(entity::error_note::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
