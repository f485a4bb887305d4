use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::LogLevel;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn log<'a>(&'a self) -> LogFixtures<'a> {
        LogFixtures { setup: self }
    }
}

pub struct LogFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> LogFixtures<'a> {
    pub async fn insert_log(
        &self,
        level: LogLevel,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<entity::app_log::Model, TestError> {
        Ok(
            entity::prelude::AppLog::insert(entity::app_log::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                level: ActiveValue::Set(level),
                message: ActiveValue::Set(message.to_string()),
                stack_trace: ActiveValue::Set(None),
                user_id: ActiveValue::Set(None),
                page_path: ActiveValue::Set(None),
                timestamp: ActiveValue::Set(timestamp),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
