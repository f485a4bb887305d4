//! Data models shared by the server API and the web client.
//!
//! DTOs in this module are serialized as JSON on the wire. Types used in API responses derive
//! `utoipa::ToSchema` when the `server` feature is enabled so they appear in the OpenAPI document.

pub mod analytics;
pub mod api;
pub mod directory;
pub mod fix_step;
pub mod log;
pub mod note;
pub mod user;
pub mod wizard;
