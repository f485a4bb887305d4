//! Application log service.
//!
//! Writes are mirrored to the local `tracing` output and queued for the database; the
//! caller never waits for or observes the remote write. Reads and retention are admin
//! operations whose failures are logged locally and reported as empty or `false`.

use chrono::{NaiveDateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::log::{LogEntryDto, LogLevel, LogRequestDto, StackTrace},
    server::{
        data::log::LogRepository,
        error::Error,
        model::{
            request::RequestContext,
            worker::{LogRecord, TelemetryJob},
        },
        util::time::retention_cutoff,
        worker::queue::TelemetryQueue,
    },
};

/// Maximum number of entries returned by [`LogService::get_logs`]
pub const LOG_READ_LIMIT: u64 = 1000;

/// Application log writes, reads and retention
pub struct LogService<'a> {
    db: &'a DatabaseConnection,
    telemetry: &'a TelemetryQueue,
}

impl<'a> LogService<'a> {
    /// Creates a new instance of [`LogService`]
    pub fn new(db: &'a DatabaseConnection, telemetry: &'a TelemetryQueue) -> Self {
        Self { db, telemetry }
    }

    /// Mirrors the entry to the console and queues it for storage.
    ///
    /// Returns whether the entry was queued; a dropped entry is still mirrored.
    pub fn log(&self, context: &RequestContext, request: LogRequestDto) -> bool {
        let record = LogRecord {
            level: request.level,
            message: request.message,
            stack_trace: request.stack_trace,
            user_id: context.resolve_user(request.user_id),
            page_path: context.resolve_path(request.page_path),
            timestamp: Utc::now().naive_utc(),
        };

        mirror_to_console(&record);

        self.telemetry.dispatch(TelemetryJob::WriteLog(record))
    }

    /// Logs a failure, optionally with the trace of the error that caused it
    pub fn log_error(
        &self,
        context: &RequestContext,
        message: &str,
        error: Option<StackTrace>,
        user_id: Option<Uuid>,
    ) -> bool {
        self.log(
            context,
            LogRequestDto {
                user_id,
                ..LogRequestDto::error(message, error)
            },
        )
    }

    /// Logs a recoverable problem
    pub fn log_warning(
        &self,
        context: &RequestContext,
        message: &str,
        user_id: Option<Uuid>,
    ) -> bool {
        self.log(
            context,
            LogRequestDto {
                user_id,
                ..LogRequestDto::warning(message)
            },
        )
    }

    /// Logs a routine event
    pub fn log_info(
        &self,
        context: &RequestContext,
        message: &str,
        user_id: Option<Uuid>,
    ) -> bool {
        self.log(
            context,
            LogRequestDto {
                user_id,
                ..LogRequestDto::info(message)
            },
        )
    }

    /// Logs an issue that needs attention; the console line is prefixed with `[CRITICAL]`
    pub fn log_critical(
        &self,
        context: &RequestContext,
        message: &str,
        error: Option<StackTrace>,
        user_id: Option<Uuid>,
    ) -> bool {
        self.log(
            context,
            LogRequestDto {
                user_id,
                ..LogRequestDto::critical(message, error)
            },
        )
    }

    /// Up to [`LOG_READ_LIMIT`] most recent entries, optionally of a single level
    pub async fn get_logs(&self, level: Option<LogLevel>) -> Vec<LogEntryDto> {
        match LogRepository::new(self.db)
            .get_recent(level.map(Into::into), LOG_READ_LIMIT)
            .await
        {
            Ok(entries) => entries.into_iter().map(LogEntryDto::from).collect(),
            Err(e) => {
                tracing::error!("Failed to fetch logs: {}", e);
                Vec::new()
            }
        }
    }

    /// Entries within the inclusive range, newest first, optionally of a single level
    pub async fn get_logs_by_date_range(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        level: Option<LogLevel>,
    ) -> Vec<LogEntryDto> {
        match LogRepository::new(self.db)
            .get_by_range(start, end, level.map(Into::into))
            .await
        {
            Ok(entries) => entries.into_iter().map(LogEntryDto::from).collect(),
            Err(e) => {
                tracing::error!("Failed to fetch logs by date range: {}", e);
                Vec::new()
            }
        }
    }

    /// Deletes every entry older than `days` days.
    ///
    /// # Returns
    /// - `true` - Old entries deleted (possibly none)
    /// - `false` - The delete failed
    pub async fn delete_old_logs(&self, days: u32) -> bool {
        match self.purge_older_than(days).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Failed to delete old logs: {}", e);
                false
            }
        }
    }

    /// Deletes every entry with a timestamp strictly before now minus `days` days.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted entries
    /// - `Err(Error::DbErr)` - The delete failed
    pub async fn purge_older_than(&self, days: u32) -> Result<u64, Error> {
        let cutoff = retention_cutoff(Utc::now(), days)?;

        let result = LogRepository::new(self.db).delete_before(cutoff).await?;
        tracing::info!(
            "Deleted {} log entries older than {} days",
            result.rows_affected,
            days
        );

        Ok(result.rows_affected)
    }
}

/// Writes the entry to the local `tracing` output at the matching level
fn mirror_to_console(record: &LogRecord) {
    let line = console_line(record);
    let user_id = record.user_id;
    let page_path = record.page_path.as_deref().unwrap_or_default();

    match record.level {
        LogLevel::Critical | LogLevel::Urgent | LogLevel::Shutdown | LogLevel::Error => {
            tracing::error!(user_id = ?user_id, page_path, "{}", line)
        }
        LogLevel::Warning => tracing::warn!(user_id = ?user_id, page_path, "{}", line),
        LogLevel::Info => tracing::info!(user_id = ?user_id, page_path, "{}", line),
        LogLevel::Debug => tracing::debug!(user_id = ?user_id, page_path, "{}", line),
    }
}

/// Console text for an entry: the message followed by its stack trace, if any
fn console_line(record: &LogRecord) -> String {
    let mut line = match record.level {
        LogLevel::Critical => format!("[CRITICAL] {}", record.message),
        _ => record.message.clone(),
    };

    if let Some(trace) = &record.stack_trace {
        line.push_str(": ");
        if let Some(name) = &trace.name {
            line.push_str(name);
            line.push_str(": ");
        }
        line.push_str(&trace.message);
        if let Some(stack) = &trace.stack {
            line.push('\n');
            line.push_str(stack);
        }
    }

    line
}
