use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::EventType;
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;
use uuid::Uuid;

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn analytics<'a>(&'a self) -> AnalyticsFixtures<'a> {
        AnalyticsFixtures { setup: self }
    }
}

pub struct AnalyticsFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> AnalyticsFixtures<'a> {
    /// Insert an analytics event from an anonymous device
    pub async fn insert_event(
        &self,
        event_type: EventType,
        path: Option<&str>,
        meta: Option<Value>,
        timestamp: NaiveDateTime,
    ) -> Result<entity::app_analytics::Model, TestError> {
        Ok(
            entity::prelude::AppAnalytics::insert(entity::app_analytics::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                event_type: ActiveValue::Set(event_type),
                user_id: ActiveValue::Set(None),
                device_id: ActiveValue::Set(Uuid::new_v4()),
                path: ActiveValue::Set(path.map(str::to_string)),
                meta: ActiveValue::Set(meta),
                timestamp: ActiveValue::Set(timestamp),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_page_view(
        &self,
        path: Option<&str>,
        timestamp: NaiveDateTime,
    ) -> Result<entity::app_analytics::Model, TestError> {
        self.insert_event(EventType::PageView, path, None, timestamp)
            .await
    }

    pub async fn insert_error_code_search(
        &self,
        error_code: &str,
        system_name: &str,
        timestamp: NaiveDateTime,
    ) -> Result<entity::app_analytics::Model, TestError> {
        let meta = serde_json::json!({ "errorCode": error_code, "systemName": system_name });

        self.insert_event(EventType::ErrorCodeSearch, None, Some(meta), timestamp)
            .await
    }
}
