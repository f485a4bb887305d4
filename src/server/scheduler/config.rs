//! Cron schedules of the periodic jobs.

/// Log retention sweep
pub mod log_retention {
    /// Daily at 03:00 UTC
    pub const CRON_EXPRESSION: &str = "0 0 3 * * *";
}
