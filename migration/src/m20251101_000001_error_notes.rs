use sea_orm_migration::{prelude::*, schema::*};

static IDX_ERROR_NOTES_SCOPE: &str = "idx_error_notes_system_code_user";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ErrorNotes::Table)
                    .if_not_exists()
                    .col(pk_uuid(ErrorNotes::Id))
                    .col(string(ErrorNotes::SystemName))
                    .col(string(ErrorNotes::ErrorCode))
                    .col(uuid(ErrorNotes::UserId))
                    .col(text(ErrorNotes::Note))
                    .col(timestamp(ErrorNotes::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ERROR_NOTES_SCOPE)
                    .table(ErrorNotes::Table)
                    .col(ErrorNotes::SystemName)
                    .col(ErrorNotes::ErrorCode)
                    .col(ErrorNotes::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ERROR_NOTES_SCOPE)
                    .table(ErrorNotes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ErrorNotes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ErrorNotes {
    Table,
    Id,
    SystemName,
    ErrorCode,
    UserId,
    Note,
    CreatedAt,
}
