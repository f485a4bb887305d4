//! Utility functions shared across services and scheduled jobs.

pub mod time;
