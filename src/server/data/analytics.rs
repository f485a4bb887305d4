//! `app_analytics` repository.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{db::AnalyticsEventModel, worker::AnalyticsEventRecord};

/// Queries and inserts for analytics events
pub struct AnalyticsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AnalyticsRepository<'a, C> {
    /// Creates a new instance of [`AnalyticsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the event with a new id
    pub async fn create(&self, event: AnalyticsEventRecord) -> Result<AnalyticsEventModel, DbErr> {
        entity::prelude::AppAnalytics::insert(entity::app_analytics::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            event_type: ActiveValue::Set(event.event_type.into()),
            user_id: ActiveValue::Set(event.user_id),
            device_id: ActiveValue::Set(event.device_id),
            path: ActiveValue::Set(event.path),
            meta: ActiveValue::Set(event.meta),
            timestamp: ActiveValue::Set(event.timestamp),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Most recent events, newest first, optionally bounded by an inclusive time range
    pub async fn get_recent(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        limit: u64,
    ) -> Result<Vec<AnalyticsEventModel>, DbErr> {
        let mut query = entity::prelude::AppAnalytics::find()
            .order_by_desc(entity::app_analytics::Column::Timestamp)
            .limit(limit);

        if let Some(start) = start {
            query = query.filter(entity::app_analytics::Column::Timestamp.gte(start));
        }
        if let Some(end) = end {
            query = query.filter(entity::app_analytics::Column::Timestamp.lte(end));
        }

        query.all(self.db).await
    }
}
