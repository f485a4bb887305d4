//! `app_logs` repository.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::LogLevel;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::model::{db::LogEntryModel, worker::LogRecord};

/// Queries, inserts and retention deletes for log entries
pub struct LogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LogRepository<'a, C> {
    /// Creates a new instance of [`LogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the entry with a new id
    pub async fn create(&self, log: LogRecord) -> Result<LogEntryModel, DbErr> {
        let stack_trace = log
            .stack_trace
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DbErr::Json(e.to_string()))?;

        entity::prelude::AppLog::insert(entity::app_log::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            level: ActiveValue::Set(log.level.into()),
            message: ActiveValue::Set(log.message),
            stack_trace: ActiveValue::Set(stack_trace),
            user_id: ActiveValue::Set(log.user_id),
            page_path: ActiveValue::Set(log.page_path),
            timestamp: ActiveValue::Set(log.timestamp),
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Most recent entries, newest first, optionally of a single level
    pub async fn get_recent(
        &self,
        level: Option<LogLevel>,
        limit: u64,
    ) -> Result<Vec<LogEntryModel>, DbErr> {
        let mut query = entity::prelude::AppLog::find()
            .order_by_desc(entity::app_log::Column::Timestamp)
            .limit(limit);

        if let Some(level) = level {
            query = query.filter(entity::app_log::Column::Level.eq(level));
        }

        query.all(self.db).await
    }

    /// Entries within the inclusive time range, newest first, optionally of a single level
    pub async fn get_by_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        level: Option<LogLevel>,
    ) -> Result<Vec<LogEntryModel>, DbErr> {
        let mut query = entity::prelude::AppLog::find()
            .filter(entity::app_log::Column::Timestamp.gte(start))
            .filter(entity::app_log::Column::Timestamp.lte(end))
            .order_by_desc(entity::app_log::Column::Timestamp);

        if let Some(level) = level {
            query = query.filter(entity::app_log::Column::Level.eq(level));
        }

        query.all(self.db).await
    }

    /// Deletes every entry with a timestamp strictly before `cutoff`
    pub async fn delete_before(&self, cutoff: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::AppLog::delete_many()
            .filter(entity::app_log::Column::Timestamp.lt(cutoff))
            .exec(self.db)
            .await
    }
}
