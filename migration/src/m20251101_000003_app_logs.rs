use sea_orm_migration::{prelude::*, schema::*};

static IDX_APP_LOGS_TIMESTAMP: &str = "idx_app_logs_timestamp";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppLogs::Table)
                    .if_not_exists()
                    .col(pk_uuid(AppLogs::Id))
                    .col(string(AppLogs::Level))
                    .col(text(AppLogs::Message))
                    .col(json_null(AppLogs::StackTrace))
                    .col(uuid_null(AppLogs::UserId))
                    .col(string_null(AppLogs::PagePath))
                    .col(timestamp(AppLogs::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_LOGS_TIMESTAMP)
                    .table(AppLogs::Table)
                    .col(AppLogs::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_LOGS_TIMESTAMP)
                    .table(AppLogs::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppLogs::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppLogs {
    Table,
    Id,
    Level,
    Message,
    StackTrace,
    UserId,
    PagePath,
    Timestamp,
}
