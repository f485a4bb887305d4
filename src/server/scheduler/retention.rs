//! Daily log retention job.

use sea_orm::DatabaseConnection;

use crate::{
    model::log::StackTrace,
    server::{
        error::Error, model::request::RequestContext, service::log::LogService,
        worker::queue::TelemetryQueue,
    },
};

/// Deletes log entries older than the retention window, returning how many were removed.
///
/// The outcome is recorded in the application log: an info entry on success, a critical
/// entry carrying the error otherwise.
pub async fn run_log_retention(
    db: DatabaseConnection,
    telemetry: TelemetryQueue,
    retention_days: u32,
) -> Result<u64, Error> {
    let service = LogService::new(&db, &telemetry);
    let context = RequestContext::default();

    match service.purge_older_than(retention_days).await {
        Ok(deleted) => {
            service.log_info(
                &context,
                &format!(
                    "Log retention removed {} entries older than {} days",
                    deleted, retention_days
                ),
                None,
            );

            Ok(deleted)
        }
        Err(e) => {
            service.log_critical(
                &context,
                "Scheduled log retention failed",
                Some(StackTrace::from_error(&e)),
                None,
            );

            Err(e)
        }
    }
}
