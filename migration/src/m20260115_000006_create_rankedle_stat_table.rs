use sea_orm_migration::{prelude::*, schema::*};

use super::m20260115_000001_create_rankedle_season_table::RankedleSeason;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankedleStat::Table)
                    .if_not_exists()
                    .col(pk_auto(RankedleStat::Id))
                    .col(integer(RankedleStat::SeasonId))
                    .col(string(RankedleStat::MemberId))
                    .col(integer(RankedleStat::Try1).default(0))
                    .col(integer(RankedleStat::Try2).default(0))
                    .col(integer(RankedleStat::Try3).default(0))
                    .col(integer(RankedleStat::Try4).default(0))
                    .col(integer(RankedleStat::Try5).default(0))
                    .col(integer(RankedleStat::Try6).default(0))
                    .col(integer(RankedleStat::Played).default(0))
                    .col(integer(RankedleStat::Won).default(0))
                    .col(integer(RankedleStat::CurrentStreak).default(0))
                    .col(integer(RankedleStat::MaxStreak).default(0))
                    .col(integer(RankedleStat::Points).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rankedle_stat_season_id")
                            .from(RankedleStat::Table, RankedleStat::SeasonId)
                            .to(RankedleSeason::Table, RankedleSeason::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rankedle_stat_season_member")
                    .table(RankedleStat::Table)
                    .col(RankedleStat::SeasonId)
                    .col(RankedleStat::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankedleStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankedleStat {
    Table,
    Id,
    SeasonId,
    MemberId,
    Try1,
    Try2,
    Try3,
    Try4,
    Try5,
    Try6,
    Played,
    Won,
    CurrentStreak,
    MaxStreak,
    Points,
}
