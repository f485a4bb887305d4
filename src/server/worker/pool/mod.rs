//! Telemetry worker with concurrency control.
//!
//! A single dispatcher task drains the [`TelemetryReceiver`] and spawns one task per job,
//! bounded by a semaphore. Each job runs once under a timeout; failures are logged and the
//! job is discarded.

mod config;

pub use config::WorkerPoolConfig;

use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing;
use tokio::sync::{Mutex, Notify, OwnedSemaphorePermit, RwLock, Semaphore};
use tokio::task::JoinHandle;

use crate::server::{
    error::Error,
    model::worker::TelemetryJob,
    worker::{handler::TelemetryJobHandler, queue::TelemetryReceiver},
};

/// Background worker writing telemetry jobs from the [`TelemetryQueue`](super::TelemetryQueue).
///
/// Cheap to clone; all clones control the same dispatcher.
#[derive(Clone)]
pub struct TelemetryWorker {
    inner: Arc<TelemetryWorkerRef>,
}

struct TelemetryWorkerRef {
    config: WorkerPoolConfig,
    handler: Arc<TelemetryJobHandler>,
    semaphore: Arc<Semaphore>,
    /// Present while stopped, moved into the dispatcher while running
    receiver: Mutex<Option<TelemetryReceiver>>,
    dispatcher: RwLock<Option<Dispatcher>>,
}

struct Dispatcher {
    shutdown: Arc<Notify>,
    handle: JoinHandle<TelemetryReceiver>,
}

impl TelemetryWorker {
    /// Creates a stopped worker, call [`TelemetryWorker::start`] to begin draining the queue.
    pub fn new(
        config: WorkerPoolConfig,
        receiver: TelemetryReceiver,
        handler: TelemetryJobHandler,
    ) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_jobs));

        Self {
            inner: Arc::new(TelemetryWorkerRef {
                config,
                handler: Arc::new(handler),
                semaphore,
                receiver: Mutex::new(Some(receiver)),
                dispatcher: RwLock::new(None),
            }),
        }
    }

    /// Starts the dispatcher.
    ///
    /// Idempotent: calling it while running logs a warning and returns `Ok`.
    pub async fn start(&self) -> Result<(), Error> {
        let mut dispatcher = self.inner.dispatcher.write().await;

        if dispatcher.is_some() {
            tracing::warn!("Telemetry worker is already running");
            return Ok(());
        }

        let Some(receiver) = self.inner.receiver.lock().await.take() else {
            tracing::warn!("Telemetry worker has no queue to drain");
            return Ok(());
        };

        tracing::info!(
            "Starting telemetry worker (max {} concurrent jobs)",
            self.inner.config.max_concurrent_jobs
        );

        let shutdown = Arc::new(Notify::new());
        let handle = self.spawn_dispatcher(receiver, Arc::clone(&shutdown));

        *dispatcher = Some(Dispatcher { shutdown, handle });

        Ok(())
    }

    fn spawn_dispatcher(
        &self,
        mut receiver: TelemetryReceiver,
        shutdown: Arc<Notify>,
    ) -> JoinHandle<TelemetryReceiver> {
        let handler = Arc::clone(&self.inner.handler);
        let semaphore = Arc::clone(&self.inner.semaphore);
        let timeout = self.inner.config.job_timeout();

        tokio::spawn(async move {
            tracing::debug!("Telemetry dispatcher started");

            loop {
                tokio::select! {
                    // Shutdown wins over jobs that are already queued
                    biased;

                    _ = shutdown.notified() => {
                        tracing::debug!("Telemetry dispatcher received shutdown signal");
                        break;
                    }

                    job = receiver.recv() => {
                        let Some(job) = job else {
                            tracing::debug!("Telemetry queue closed, dispatcher exiting");
                            break;
                        };

                        match Arc::clone(&semaphore).acquire_owned().await {
                            Ok(permit) => {
                                let handler = Arc::clone(&handler);

                                tokio::spawn(async move {
                                    Self::execute_job(job, handler, timeout, permit).await;
                                });
                            }
                            Err(_) => {
                                tracing::warn!("Telemetry worker semaphore closed, dropping job: {}", job);
                            }
                        }
                    }
                }
            }

            tracing::debug!("Telemetry dispatcher stopped");

            receiver
        })
    }

    async fn execute_job(
        job: TelemetryJob,
        handler: Arc<TelemetryJobHandler>,
        timeout: Duration,
        _permit: OwnedSemaphorePermit,
    ) {
        match tokio::time::timeout(timeout, handler.handle(&job)).await {
            Ok(Ok(())) => {
                tracing::trace!("Telemetry job completed: {}", job);
            }
            Ok(Err(e)) => {
                tracing::error!("Telemetry job failed: {}, error: {}", job, e);
            }
            Err(_) => {
                tracing::error!(
                    "Telemetry job timed out after {} seconds: {}",
                    timeout.as_secs(),
                    job
                );
            }
        }
    }

    /// Stops taking new jobs.
    ///
    /// Signals the dispatcher, waits for it to exit, then waits for in-flight jobs, both
    /// bounded by the configured shutdown timeout. Jobs still queued stay queued and are
    /// processed if the worker is started again. A dispatcher that misses the timeout is
    /// aborted; its queue is closed with it and the worker can't be restarted. Idempotent.
    pub async fn stop(&self) -> Result<(), Error> {
        let Some(mut dispatcher) = self.inner.dispatcher.write().await.take() else {
            tracing::debug!("Telemetry worker is already stopped");
            return Ok(());
        };

        tracing::info!("Shutting down telemetry worker...");

        let shutdown_timeout = self.inner.config.shutdown_timeout();
        dispatcher.shutdown.notify_one();

        match tokio::time::timeout(shutdown_timeout, &mut dispatcher.handle).await {
            Ok(Ok(receiver)) => {
                *self.inner.receiver.lock().await = Some(receiver);
            }
            Ok(Err(e)) => {
                tracing::error!("Telemetry dispatcher panicked: {:?}", e);
            }
            Err(_) => {
                dispatcher.handle.abort();
                let _ = dispatcher.handle.await;
                tracing::error!(
                    "Telemetry dispatcher did not stop within timeout and was aborted, \
                     queued jobs were lost and the worker can't be restarted"
                );
            }
        }

        let max_permits = self.inner.config.max_concurrent_jobs as u32;
        let drained = tokio::time::timeout(
            shutdown_timeout,
            self.inner.semaphore.acquire_many(max_permits),
        )
        .await;

        if !matches!(drained, Ok(Ok(_))) {
            tracing::warn!(
                "{} telemetry job(s) still running after shutdown timeout",
                self.active_job_count()
            );
        }

        tracing::info!("Telemetry worker shut down");

        Ok(())
    }

    /// Whether the dispatcher is draining the queue
    pub async fn is_running(&self) -> bool {
        self.inner.dispatcher.read().await.is_some()
    }

    /// Permits left before the worker is at its concurrency limit
    pub fn available_permits(&self) -> usize {
        self.inner.semaphore.available_permits()
    }

    /// Configured concurrency limit
    pub fn max_concurrent_jobs(&self) -> usize {
        self.inner.config.max_concurrent_jobs
    }

    /// Number of jobs currently executing
    pub fn active_job_count(&self) -> usize {
        self.inner.config.max_concurrent_jobs - self.inner.semaphore.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use chrono::Utc;
    use fixdesk_test_utils::prelude::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    use super::{TelemetryWorker, WorkerPoolConfig};
    use crate::{
        model::log::LogLevel,
        server::{
            model::worker::{LogRecord, TelemetryJob},
            worker::{handler::TelemetryJobHandler, queue::TelemetryQueue},
        },
    };

    fn log_job(message: &str) -> TelemetryJob {
        TelemetryJob::WriteLog(LogRecord {
            level: LogLevel::Info,
            message: message.to_string(),
            stack_trace: None,
            user_id: None,
            page_path: None,
            timestamp: Utc::now().naive_utc(),
        })
    }

    async fn wait_for_logs(test: &TestSetup, expected: u64) -> Result<u64, TestError> {
        let mut count = 0;
        for _ in 0..50 {
            count = entity::prelude::AppLog::find().count(&test.db).await?;
            if count >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }

        Ok(count)
    }

    mod start {
        use super::*;

        /// Expect queued jobs to be written once the worker is started
        #[tokio::test]
        async fn processes_queued_jobs() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::new(2),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );

            assert!(queue.dispatch(log_job("one")));
            assert!(queue.dispatch(log_job("two")));
            worker.start().await.unwrap();

            assert!(worker.is_running().await);
            assert_eq!(wait_for_logs(&test, 2).await?, 2);

            worker.stop().await.unwrap();

            Ok(())
        }

        /// Expect starting twice to keep a single dispatcher
        #[tokio::test]
        async fn start_is_idempotent() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (_queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::new(2),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );

            worker.start().await.unwrap();
            worker.start().await.unwrap();

            assert!(worker.is_running().await);
            assert_eq!(worker.available_permits(), 2);

            worker.stop().await.unwrap();

            Ok(())
        }

        /// Expect a failing job to be discarded without stopping the worker
        #[tokio::test]
        async fn failed_job_is_discarded() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let (queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::new(1),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );
            worker.start().await.unwrap();

            assert!(queue.dispatch(log_job("no table")));
            tokio::time::sleep(Duration::from_millis(100)).await;

            assert!(worker.is_running().await);
            assert_eq!(worker.active_job_count(), 0);

            worker.stop().await.unwrap();

            Ok(())
        }
    }

    mod stop {
        use super::*;

        /// Expect stop to leave the worker stopped with all permits released
        #[tokio::test]
        async fn stops_running_worker() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (_queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::new(3),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );
            worker.start().await.unwrap();

            worker.stop().await.unwrap();

            assert!(!worker.is_running().await);
            assert_eq!(worker.available_permits(), 3);

            Ok(())
        }

        /// Expect stopping a stopped worker to succeed
        #[tokio::test]
        async fn stop_is_idempotent() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (_queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::default(),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );

            assert!(worker.stop().await.is_ok());
            assert!(!worker.is_running().await);

            Ok(())
        }

        /// Expect a dispatcher stuck past the timeout to be aborted, closing its queue
        #[tokio::test]
        async fn aborts_stuck_dispatcher() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig {
                    shutdown_timeout_seconds: 1,
                    ..WorkerPoolConfig::new(1)
                },
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );
            let held = Arc::clone(&worker.inner.semaphore)
                .acquire_owned()
                .await
                .unwrap();
            worker.start().await.unwrap();

            // The dispatcher takes the job, then waits on the held permit
            assert!(queue.dispatch(log_job("stuck")));
            tokio::time::sleep(Duration::from_millis(50)).await;
            worker.stop().await.unwrap();

            assert!(!worker.is_running().await);
            assert!(queue.is_closed());
            assert!(!queue.dispatch(log_job("after abort")));

            worker.start().await.unwrap();
            assert!(!worker.is_running().await);

            drop(held);

            Ok(())
        }

        /// Expect jobs dispatched while stopped to be written after a restart
        #[tokio::test]
        async fn restart_resumes_queue() -> Result<(), TestError> {
            let test = test_setup_with_fixdesk_tables!()?;
            let (queue, receiver) = TelemetryQueue::new(8);
            let worker = TelemetryWorker::new(
                WorkerPoolConfig::new(1),
                receiver,
                TelemetryJobHandler::new(test.db.clone()),
            );
            worker.start().await.unwrap();
            worker.stop().await.unwrap();

            assert!(queue.dispatch(log_job("while stopped")));
            worker.start().await.unwrap();

            assert_eq!(wait_for_logs(&test, 1).await?, 1);

            worker.stop().await.unwrap();

            Ok(())
        }
    }
}
