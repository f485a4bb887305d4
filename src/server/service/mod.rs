//! Service layer for business logic.
//!
//! Services sit between the controllers and the repositories: note, fix-step and log
//! management, analytics tracking and aggregation, access token verification and the
//! device directory client. Telemetry writes are dispatched to the background queue rather
//! than written inline.

pub mod analytics;
pub mod auth;
pub mod directory;
pub mod fix_step;
pub mod log;
pub mod note;
