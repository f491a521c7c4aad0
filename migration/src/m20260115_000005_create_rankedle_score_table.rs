use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260115_000003_create_rankedle_message_table::RankedleMessage,
    m20260115_000004_create_rankedle_table::Rankedle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RankedleScore::Table)
                    .if_not_exists()
                    .col(pk_auto(RankedleScore::Id))
                    .col(integer(RankedleScore::RankedleId))
                    .col(string(RankedleScore::MemberId))
                    .col(timestamp(RankedleScore::DateStart))
                    .col(timestamp_null(RankedleScore::DateEnd))
                    .col(integer(RankedleScore::Skips))
                    .col(json_null(RankedleScore::Details))
                    .col(boolean(RankedleScore::Hint))
                    .col(boolean_null(RankedleScore::Success))
                    .col(integer_null(RankedleScore::MessageId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rankedle_score_rankedle_id")
                            .from(RankedleScore::Table, RankedleScore::RankedleId)
                            .to(Rankedle::Table, Rankedle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rankedle_score_message_id")
                            .from(RankedleScore::Table, RankedleScore::MessageId)
                            .to(RankedleMessage::Table, RankedleMessage::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One attempt per (puzzle, player).
        manager
            .create_index(
                Index::create()
                    .name("idx_rankedle_score_rankedle_member")
                    .table(RankedleScore::Table)
                    .col(RankedleScore::RankedleId)
                    .col(RankedleScore::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RankedleScore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RankedleScore {
    Table,
    Id,
    RankedleId,
    MemberId,
    DateStart,
    DateEnd,
    Skips,
    Details,
    Hint,
    Success,
    MessageId,
}
