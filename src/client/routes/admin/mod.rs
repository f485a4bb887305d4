pub mod analytics;
pub mod fix_steps;
pub mod logs;

pub use analytics::AdminAnalytics;
pub use fix_steps::AdminFixSteps;
pub use logs::AdminLogs;
