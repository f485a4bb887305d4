//! Executes telemetry jobs against the database.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{analytics::AnalyticsRepository, log::LogRepository},
    error::Error,
    model::worker::TelemetryJob,
};

/// Writes one telemetry job's record through the repositories
pub struct TelemetryJobHandler {
    db: DatabaseConnection,
}

impl TelemetryJobHandler {
    /// Creates a new instance of [`TelemetryJobHandler`]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Writes the job's record.
    ///
    /// # Returns
    /// - `Ok(())` - Record inserted
    /// - `Err(Error::DbErr)` - Insert failed, the job is not retried
    pub async fn handle(&self, job: &TelemetryJob) -> Result<(), Error> {
        match job {
            TelemetryJob::TrackEvent(event) => {
                let event = AnalyticsRepository::new(&self.db)
                    .create(event.clone())
                    .await?;

                tracing::trace!("Stored analytics event {}", event.id);
            }
            TelemetryJob::WriteLog(record) => {
                let entry = LogRepository::new(&self.db).create(record.clone()).await?;

                tracing::trace!("Stored log entry {}", entry.id);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use fixdesk_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::json;
    use uuid::Uuid;

    use super::TelemetryJobHandler;
    use crate::{
        model::{
            analytics::EventType,
            log::{LogLevel, StackTrace},
        },
        server::{
            error::Error,
            model::worker::{AnalyticsEventRecord, LogRecord, TelemetryJob},
        },
    };

    fn event_job() -> TelemetryJob {
        TelemetryJob::TrackEvent(AnalyticsEventRecord {
            event_type: EventType::ErrorCodeSearch,
            user_id: None,
            device_id: Uuid::new_v4(),
            path: Some("/".to_string()),
            meta: Some(json!({ "errorCode": "E001", "systemName": "Victorum" })),
            timestamp: Utc::now().naive_utc(),
        })
    }

    fn log_job() -> TelemetryJob {
        TelemetryJob::WriteLog(LogRecord {
            level: LogLevel::Error,
            message: "Failed to load notes".to_string(),
            stack_trace: Some(StackTrace::from_message("timeout")),
            user_id: Some(Uuid::new_v4()),
            page_path: Some("/".to_string()),
            timestamp: Utc::now().naive_utc(),
        })
    }

    /// Expect an analytics job to insert one event row
    #[tokio::test]
    async fn stores_analytics_event() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let handler = TelemetryJobHandler::new(test.db.clone());

        let result = handler.handle(&event_job()).await;

        assert!(result.is_ok());
        let count = entity::prelude::AppAnalytics::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    /// Expect a log job to insert one log row
    #[tokio::test]
    async fn stores_log_entry() -> Result<(), TestError> {
        let test = test_setup_with_fixdesk_tables!()?;
        let handler = TelemetryJobHandler::new(test.db.clone());

        let result = handler.handle(&log_job()).await;

        assert!(result.is_ok());
        let count = entity::prelude::AppLog::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    /// Expect a database error when the tables are missing
    #[tokio::test]
    async fn fails_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let handler = TelemetryJobHandler::new(test.db.clone());

        let result = handler.handle(&log_job()).await;

        assert!(matches!(result, Err(Error::DbErr(_))));

        Ok(())
    }
}
