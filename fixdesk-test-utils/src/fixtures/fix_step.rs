use chrono::NaiveDateTime;
use entity::fix_step::StringList;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn fix_step<'a>(&'a self) -> FixStepFixtures<'a> {
        FixStepFixtures { setup: self }
    }
}

pub struct FixStepFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> FixStepFixtures<'a> {
    /// Insert a fix step with the given title and placeholder content
    pub async fn insert_fix_step(
        &self,
        title: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::fix_step::Model, TestError> {
        Ok(
            entity::prelude::FixStep::insert(entity::fix_step::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                brand: ActiveValue::Set(None),
                model: ActiveValue::Set(None),
                error_code: ActiveValue::Set(None),
                title: ActiveValue::Set(title.to_string()),
                content: ActiveValue::Set(format!("Steps for {}", title)),
                tags: ActiveValue::Set(StringList::default()),
                media_urls: ActiveValue::Set(StringList::default()),
                created_at: ActiveValue::Set(created_at),
                created_by: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
