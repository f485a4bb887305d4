//! Admin knowledge-base service.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::fix_step::{CreateFixStepDto, FixStepDto},
    server::{
        data::fix_step::{FixStepRepository, NewFixStep},
        error::{validation::ValidationError, Error},
    },
};

/// Knowledge-base management for administrators
pub struct FixStepService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixStepService<'a> {
    /// Creates a new instance of [`FixStepService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All fix steps, newest first
    pub async fn get_fix_steps(&self) -> Result<Vec<FixStepDto>, Error> {
        let fix_steps = FixStepRepository::new(self.db).get_all().await?;

        Ok(fix_steps.into_iter().map(FixStepDto::from).collect())
    }

    /// Stores a new fix step and returns the reloaded list.
    ///
    /// Title and content are checked before the database is touched. Blank brand, model
    /// and error code are stored as null; blank tags and media URLs are dropped.
    ///
    /// # Returns
    /// - `Ok(Vec<FixStepDto>)` - Every fix step after the insert
    /// - `Err(Error::ValidationError)` - Title or content blank
    /// - `Err(Error::DbErr)` - Insert or reload failed
    pub async fn create_fix_step(
        &self,
        fix_step: CreateFixStepDto,
        created_by: Option<Uuid>,
    ) -> Result<Vec<FixStepDto>, Error> {
        if !fix_step.has_required_fields() {
            return Err(ValidationError::MissingFixStepFields.into());
        }

        let new_fix_step = NewFixStep {
            brand: non_blank(fix_step.brand),
            model: non_blank(fix_step.model),
            error_code: non_blank(fix_step.error_code),
            title: fix_step.title.trim().to_string(),
            content: fix_step.content.trim().to_string(),
            tags: non_blank_entries(fix_step.tags),
            media_urls: non_blank_entries(fix_step.media_urls),
            created_by,
        };

        let created = FixStepRepository::new(self.db).create(new_fix_step).await?;
        tracing::info!(fix_step_id = %created.id, "Created fix step \"{}\"", created.title);

        self.get_fix_steps().await
    }

    /// Deletes the fix step and returns the reloaded list
    pub async fn delete_fix_step(&self, fix_step_id: Uuid) -> Result<Vec<FixStepDto>, Error> {
        let result = FixStepRepository::new(self.db).delete(fix_step_id).await?;

        if result.rows_affected > 0 {
            tracing::info!(fix_step_id = %fix_step_id, "Deleted fix step");
        }

        self.get_fix_steps().await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn non_blank_entries(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| non_blank(Some(value)))
        .collect()
}
