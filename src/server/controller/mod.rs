//! HTTP controller endpoints for the fixdesk web API.
//!
//! Axum handlers for the session login, notes, analytics, logs, fix steps and the device
//! directory proxy. Handlers read the session, call a service and map errors through
//! [`Error`](crate::server::error::Error)'s `IntoResponse`. Every handler carries a utoipa
//! annotation so it appears in the OpenAPI document.

pub mod analytics;
pub mod auth;
pub mod directory;
pub mod fix_step;
pub mod log;
pub mod note;
pub mod util;
