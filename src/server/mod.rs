//! Server application core modules.
//!
//! Everything that runs on the server side of fixdesk: HTTP routing and controllers, session
//! authentication, database repositories, the background telemetry worker that stores
//! analytics events and log entries, the scheduled log retention sweep and the client for the
//! external device directory.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
pub mod worker;
