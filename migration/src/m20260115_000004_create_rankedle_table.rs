use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000001_create_rankedle_season_table::RankedleSeason,
    m20260115_000002_create_rankedle_map_table::RankedleMap,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rankedle::Table)
                    .if_not_exists()
                    .col(pk_auto(Rankedle::Id))
                    .col(integer(Rankedle::SeasonId))
                    .col(integer(Rankedle::MapId))
                    // One puzzle per calendar day; rows start out undated.
                    .col(date_null(Rankedle::Date).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rankedle_season_id")
                            .from(Rankedle::Table, Rankedle::SeasonId)
                            .to(RankedleSeason::Table, RankedleSeason::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rankedle_map_id")
                            .from(Rankedle::Table, Rankedle::MapId)
                            .to(RankedleMap::Table, RankedleMap::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rankedle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rankedle {
    Table,
    Id,
    SeasonId,
    MapId,
    Date,
}
