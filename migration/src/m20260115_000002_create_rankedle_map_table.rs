use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankedleMap::Table)
                    .if_not_exists()
                    .col(pk_auto(RankedleMap::Id))
                    .col(string_uniq(RankedleMap::MapKey))
                    .col(string(RankedleMap::SongName))
                    .col(string(RankedleMap::SongSubName))
                    .col(string(RankedleMap::SongAuthorName))
                    .col(string(RankedleMap::LevelAuthorName))
                    .col(integer(RankedleMap::Duration))
                    .col(string(RankedleMap::CoverUrl))
                    .col(string(RankedleMap::DownloadUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankedleMap::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankedleMap {
    Table,
    Id,
    MapKey,
    SongName,
    SongSubName,
    SongAuthorName,
    LevelAuthorName,
    Duration,
    CoverUrl,
    DownloadUrl,
}
