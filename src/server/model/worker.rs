//! Telemetry job definitions.
//!
//! Analytics events and log entries are written to the database in the background. Each job
//! carries a fully resolved record: user, device, path and timestamp are captured when the
//! job is created, not when it runs.

use std::fmt;

use chrono::NaiveDateTime;
use serde_json::Value;
use uuid::Uuid;

use crate::model::{
    analytics::EventType,
    log::{LogLevel, StackTrace},
};

/// Analytics event ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEventRecord {
    /// Kind of event
    pub event_type: EventType,
    /// Resolved user, absent for anonymous visitors
    pub user_id: Option<Uuid>,
    /// Browser profile the event came from
    pub device_id: Uuid,
    /// Resolved page path
    pub path: Option<String>,
    /// Free-form event metadata
    pub meta: Option<Value>,
    /// When the event was tracked (UTC)
    pub timestamp: NaiveDateTime,
}

/// Log entry ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Structured error payload
    pub stack_trace: Option<StackTrace>,
    /// Resolved user
    pub user_id: Option<Uuid>,
    /// Resolved page path
    pub page_path: Option<String>,
    /// When the entry was logged (UTC)
    pub timestamp: NaiveDateTime,
}

/// Background write executed by the telemetry worker at most once
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryJob {
    /// Insert an `app_analytics` row
    TrackEvent(AnalyticsEventRecord),
    /// Insert an `app_logs` row
    WriteLog(LogRecord),
}

impl fmt::Display for TelemetryJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackEvent(event) => write!(
                f,
                "TrackEvent {{ event_type: {}, device_id: {} }}",
                event.event_type, event.device_id
            ),
            Self::WriteLog(log) => write!(f, "WriteLog {{ level: {} }}", log.level),
        }
    }
}
