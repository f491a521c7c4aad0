use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankedleSeason::Table)
                    .if_not_exists()
                    .col(pk_auto(RankedleSeason::Id))
                    .col(date(RankedleSeason::DateStart))
                    .col(date(RankedleSeason::DateEnd))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankedleSeason::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankedleSeason {
    Table,
    Id,
    DateStart,
    DateEnd,
}
