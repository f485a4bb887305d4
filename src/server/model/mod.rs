//! Server-side models.
//!
//! Application state, database model aliases, request context, session wrappers and telemetry job
//! definitions. These bridge database entities, HTTP handlers and the telemetry worker.

pub mod app;
pub mod db;
pub mod request;
pub mod session;
pub mod worker;
