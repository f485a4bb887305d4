pub use super::app_analytics::Entity as AppAnalytics;
pub use super::app_log::Entity as AppLog;
pub use super::error_note::Entity as ErrorNote;
pub use super::fix_step::Entity as FixStep;
