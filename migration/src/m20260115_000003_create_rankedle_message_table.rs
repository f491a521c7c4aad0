use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankedleMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(RankedleMessage::Id))
                    .col(string(RankedleMessage::Kind))
                    .col(text_null(RankedleMessage::Content))
                    .col(ColumnDef::new(RankedleMessage::Image).blob().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankedleMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankedleMessage {
    Table,
    Id,
    Kind,
    Content,
    Image,
}
