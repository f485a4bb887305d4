//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, then the response status and JSON
//! body are checked.

mod analytics;
mod auth;
mod directory;
mod fix_step;
mod log;
mod note;

use fixdesk_test_utils::prelude::*;

use crate::util::{json_body, TestSetupExt};
