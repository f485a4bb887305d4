//! Startup wiring: database, sessions, telemetry worker, scheduler and device directory.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::{directory::DirectoryError, Error},
    scheduler::Scheduler,
    service::directory::DeviceDirectory,
    worker::{TelemetryJobHandler, TelemetryQueue, TelemetryWorker, WorkerPoolConfig},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management.
///
/// Sessions carry the anonymous device identity, so they live for a year of inactivity.
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(365)));

    Ok(session)
}

/// Create the telemetry queue and start the worker draining it
pub async fn start_telemetry_worker(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(TelemetryQueue, TelemetryWorker), Error> {
    let (queue, receiver) = TelemetryQueue::new(config.telemetry_queue_capacity);
    let worker = TelemetryWorker::new(
        WorkerPoolConfig::default(),
        receiver,
        TelemetryJobHandler::new(db),
    );

    worker.start().await?;

    Ok((queue, worker))
}

/// Register and start the maintenance jobs
pub async fn start_scheduler(
    config: &Config,
    db: DatabaseConnection,
    telemetry: TelemetryQueue,
) -> Result<JobScheduler, Error> {
    Scheduler::new(db, telemetry, config.log_retention_days)
        .await?
        .start()
        .await
}

/// Build the HTTP client for the external device directory
pub fn build_directory(config: &Config) -> Result<DeviceDirectory, Error> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("fixdesk/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(DirectoryError::from)?;

    let directory = DeviceDirectory::new(client, &config.device_directory_url)?;
    tracing::debug!("Device directory at {}", config.device_directory_url);

    Ok(directory)
}
