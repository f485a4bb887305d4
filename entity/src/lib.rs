//! SeaORM entities for the fixdesk tables.

pub mod prelude;

pub mod app_analytics;
pub mod app_log;
pub mod error_note;
pub mod fix_step;
pub mod sea_orm_active_enums;
