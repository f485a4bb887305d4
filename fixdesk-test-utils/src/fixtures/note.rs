use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn note<'a>(&'a self) -> NoteFixtures<'a> {
        NoteFixtures { setup: self }
    }
}

pub struct NoteFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> NoteFixtures<'a> {
    pub async fn insert_note(
        &self,
        system_name: &str,
        error_code: &str,
        user_id: Uuid,
        note: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::error_note::Model, TestError> {
        Ok(
            entity::prelude::ErrorNote::insert(entity::error_note::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                system_name: ActiveValue::Set(system_name.to_string()),
                error_code: ActiveValue::Set(error_code.to_string()),
                user_id: ActiveValue::Set(user_id),
                note: ActiveValue::Set(note.to_string()),
                created_at: ActiveValue::Set(created_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
