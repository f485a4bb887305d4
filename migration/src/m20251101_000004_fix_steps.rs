use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FixSteps::Table)
                    .if_not_exists()
                    .col(pk_uuid(FixSteps::Id))
                    .col(string_null(FixSteps::Brand))
                    .col(string_null(FixSteps::Model))
                    .col(string_null(FixSteps::ErrorCode))
                    .col(string(FixSteps::Title))
                    .col(text(FixSteps::Content))
                    .col(json(FixSteps::Tags))
                    .col(json(FixSteps::MediaUrls))
                    .col(timestamp(FixSteps::CreatedAt))
                    .col(uuid_null(FixSteps::CreatedBy))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FixSteps::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FixSteps {
    Table,
    Id,
    Brand,
    Model,
    ErrorCode,
    Title,
    Content,
    Tags,
    MediaUrls,
    CreatedAt,
    CreatedBy,
}
