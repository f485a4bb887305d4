use std::time::Duration;

/// Configuration for the telemetry worker
#[derive(Debug, Clone)]
pub struct WorkerPoolConfig {
    /// Maximum number of telemetry writes running at the same time.
    ///
    /// Keep this below the database connection pool size so request handlers still get
    /// connections while the worker is busy.
    pub max_concurrent_jobs: usize,

    /// Maximum time a single write may run before it is abandoned (seconds).
    pub job_timeout_seconds: u64,

    /// Maximum time to wait for the dispatcher and in-flight writes on shutdown (seconds).
    pub shutdown_timeout_seconds: u64,
}

impl WorkerPoolConfig {
    /// Default timeouts with the given concurrency, raised to at least 1
    pub fn new(max_concurrent_jobs: usize) -> Self {
        Self {
            max_concurrent_jobs: max_concurrent_jobs.max(1),
            job_timeout_seconds: 10,
            shutdown_timeout_seconds: 5,
        }
    }

    /// [`Self::job_timeout_seconds`] as a [`Duration`]
    pub fn job_timeout(&self) -> Duration {
        Duration::from_secs(self.job_timeout_seconds)
    }

    /// [`Self::shutdown_timeout_seconds`] as a [`Duration`]
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_seconds)
    }
}

impl Default for WorkerPoolConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
