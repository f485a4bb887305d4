pub use sea_orm_migration::prelude::*;

mod m20251101_000001_error_notes;
mod m20251101_000002_app_analytics;
mod m20251101_000003_app_logs;
mod m20251101_000004_fix_steps;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_error_notes::Migration),
            Box::new(m20251101_000002_app_analytics::Migration),
            Box::new(m20251101_000003_app_logs::Migration),
            Box::new(m20251101_000004_fix_steps::Migration),
        ]
    }
}
