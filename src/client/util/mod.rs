pub mod admin;
pub mod api;
pub mod directory;
pub mod note;
pub mod telemetry;
pub mod user;
