use sea_orm_migration::{prelude::*, schema::*};

static IDX_APP_ANALYTICS_TIMESTAMP: &str = "idx_app_analytics_timestamp";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppAnalytics::Table)
                    .if_not_exists()
                    .col(pk_uuid(AppAnalytics::Id))
                    .col(string(AppAnalytics::EventType))
                    .col(uuid_null(AppAnalytics::UserId))
                    .col(uuid(AppAnalytics::DeviceId))
                    .col(string_null(AppAnalytics::Path))
                    .col(json_null(AppAnalytics::Meta))
                    .col(timestamp(AppAnalytics::Timestamp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APP_ANALYTICS_TIMESTAMP)
                    .table(AppAnalytics::Table)
                    .col(AppAnalytics::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APP_ANALYTICS_TIMESTAMP)
                    .table(AppAnalytics::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppAnalytics::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AppAnalytics {
    Table,
    Id,
    EventType,
    UserId,
    DeviceId,
    Path,
    Meta,
    Timestamp,
}
