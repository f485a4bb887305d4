//! Application state.

use sea_orm::DatabaseConnection;

use crate::server::{
    service::{auth::TokenVerifier, directory::DeviceDirectory},
    worker::queue::TelemetryQueue,
};

/// Shared handles passed to every handler through axum's `State`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Sender for background analytics and log writes
    pub telemetry: TelemetryQueue,
    /// External device directory client
    pub directory: DeviceDirectory,
    /// Access token validator for session sign-in
    pub token_verifier: TokenVerifier,
}
