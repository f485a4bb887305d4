//! Scheduler for periodic maintenance jobs.
//!
//! Jobs are registered with cron expressions from [`config`] and run inside the server
//! process. Currently the only job is the daily log retention sweep.

use std::sync::Arc;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, worker::queue::TelemetryQueue};

pub mod config;
pub mod retention;

use self::{config::log_retention as log_retention_config, retention::run_log_retention};

/// Job scheduler for background maintenance.
pub struct Scheduler {
    db: DatabaseConnection,
    telemetry: TelemetryQueue,
    log_retention_days: u32,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `db` - Database connection handed to every job
    /// - `telemetry` - Telemetry queue handed to every job
    /// - `log_retention_days` - Age in days after which log entries are deleted
    pub async fn new(
        db: DatabaseConnection,
        telemetry: TelemetryQueue,
        log_retention_days: u32,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            db,
            telemetry,
            log_retention_days,
            sched,
        })
    }

    /// Registers all jobs and starts the scheduler.
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - Running scheduler, shut it down with `JobScheduler::shutdown`
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<JobScheduler, Error> {
        let retention_days = self.log_retention_days;

        self.schedule_job(
            log_retention_config::CRON_EXPRESSION,
            "log retention",
            move |db, telemetry| run_log_retention(db, telemetry, retention_days),
        )
        .await?;

        self.sched.start().await?;
        tracing::info!(
            "Scheduler started (log retention {} days)",
            self.log_retention_days
        );

        Ok(self.sched)
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution the job's result is logged: the affected row count on success, the
    /// error otherwise.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds (e.g. "0 0 3 * * *" for daily at 03:00)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job receiving clones of the database connection and telemetry queue
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, TelemetryQueue) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let telemetry = self.telemetry.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let telemetry = telemetry.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, telemetry).await {
                        Ok(count) => tracing::info!("Job {} affected {} row(s)", name, count),
                        Err(e) => tracing::error!("Error running {} job: {}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
