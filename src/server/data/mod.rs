//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over `ConnectionTrait` so they work
//! with a pooled connection or inside a transaction, and return `sea_orm::DbErr`.

pub mod analytics;
pub mod fix_step;
pub mod log;
pub mod note;
