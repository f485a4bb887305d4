//! Test fixtures for database rows and HTTP mocks.
//!
//! - `analytics`, `log`, `note`, `fix_step` - rows inserted into the in-memory database
//! - `directory` - mock device directory endpoints
//! - `factory` - pure functions building tokens and timestamps

pub mod analytics;
pub mod directory;
pub mod factory;
pub mod fix_step;
pub mod log;
pub mod note;
