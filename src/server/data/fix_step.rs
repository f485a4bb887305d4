//! `fix_steps` repository.

use chrono::Utc;
use entity::fix_step::StringList;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder};
use uuid::Uuid;

use crate::server::model::db::FixStepModel;

/// Normalized fields of a new fix step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFixStep {
    /// Appliance brand, if specific to one
    pub brand: Option<String>,
    /// Appliance model, if specific to one
    pub model: Option<String>,
    /// Error code the fix applies to
    pub error_code: Option<String>,
    /// Short title
    pub title: String,
    /// Fix instructions
    pub content: String,
    /// Search tags
    pub tags: Vec<String>,
    /// Image or video URLs
    pub media_urls: Vec<String>,
    /// Admin who created it
    pub created_by: Option<Uuid>,
}

/// Queries, inserts and deletes for fix steps
pub struct FixStepRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FixStepRepository<'a, C> {
    /// Creates a new instance of [`FixStepRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All fix steps, newest first
    pub async fn get_all(&self) -> Result<Vec<FixStepModel>, DbErr> {
        entity::prelude::FixStep::find()
            .order_by_desc(entity::fix_step::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Inserts the fix step with a new id, created now
    pub async fn create(&self, fix_step: NewFixStep) -> Result<FixStepModel, DbErr> {
        entity::prelude::FixStep::insert(entity::fix_step::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            brand: ActiveValue::Set(fix_step.brand),
            model: ActiveValue::Set(fix_step.model),
            error_code: ActiveValue::Set(fix_step.error_code),
            title: ActiveValue::Set(fix_step.title),
            content: ActiveValue::Set(fix_step.content),
            tags: ActiveValue::Set(StringList(fix_step.tags)),
            media_urls: ActiveValue::Set(StringList(fix_step.media_urls)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            created_by: ActiveValue::Set(fix_step.created_by),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Deletes a fix step
    ///
    /// Returns OK regardless of the fix step existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, fix_step_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::FixStep::delete_by_id(fix_step_id)
            .exec(self.db)
            .await
    }
}
