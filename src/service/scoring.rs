//! Season stat aggregation and the leaderboard.

use sea_orm::DatabaseConnection;

use crate::data::{RankedleRepository, ScoreRepository, SeasonRepository, StatRepository};
use crate::error::AppError;
use crate::model::rankedle::{PlayerRanking, PlayerSeasonStats, POINTS};
use crate::service::discord::GuildGateway;

pub struct StatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Folds a terminal attempt into the player's season counters.
    ///
    /// The attempt's `date_end` acts as the idempotency gate: the counters are
    /// only touched by whoever stamps it first, so concurrent finishers and a
    /// later `finish` sweep cannot double-count.
    pub async fn update_player_stats(
        &self,
        rankedle: &entity::rankedle::Model,
        score: &entity::rankedle_score::Model,
    ) -> Result<(), AppError> {
        let score_repo = ScoreRepository::new(self.db);
        if !score_repo.mark_ended(score.id).await? {
            return Ok(());
        }

        let stat_repo = StatRepository::new(self.db);
        let mut stat = stat_repo
            .get_or_create(rankedle.season_id, &score.member_id)
            .await?;

        stat.played += 1;
        if score.success == Some(true) {
            let skips = score.skips.clamp(0, 6) as usize;
            match skips {
                0 => stat.try1 += 1,
                1 => stat.try2 += 1,
                2 => stat.try3 += 1,
                3 => stat.try4 += 1,
                4 => stat.try5 += 1,
                5 => stat.try6 += 1,
                _ => {}
            }
            stat.won += 1;
            stat.current_streak += 1;
            if stat.current_streak > stat.max_streak {
                stat.max_streak = stat.current_streak;
            }
            stat.points += POINTS[skips];
        } else {
            stat.current_streak = 0;
        }

        stat_repo.apply(stat).await?;
        Ok(())
    }

    /// Settles every open attempt on the latest puzzle before a rollover.
    ///
    /// Attempts that consumed at least one reveal step are forfeited as
    /// losses; untouched attempts stay open but still count as played.
    pub async fn finish(&self) -> Result<(), AppError> {
        let Some(rankedle) = RankedleRepository::new(self.db).last().await? else {
            return Ok(());
        };

        let score_repo = ScoreRepository::new(self.db);
        for open in score_repo.unfinished_for_rankedle(rankedle.id).await? {
            if open.skips > 0 {
                score_repo.close(open.id, false, None).await?;
            }
            let score = score_repo
                .find_by_id(open.id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("attempt {}", open.id)))?;
            self.update_player_stats(&rankedle, &score).await?;
        }
        Ok(())
    }

    /// The current season's stat row for one player.
    pub async fn player_stats(
        &self,
        member_id: &str,
    ) -> Result<Option<entity::rankedle_stat::Model>, AppError> {
        let Some(season) = SeasonRepository::new(self.db).current().await? else {
            return Ok(None);
        };
        Ok(StatRepository::new(self.db).find(season.id, member_id).await?)
    }

    /// The season leaderboard with dense competition ranking: tied point
    /// totals share a rank, and the next distinct total takes the next rank.
    ///
    /// Members no longer resolvable through the gateway are dropped from the
    /// board without consuming a rank.
    pub async fn ranking(
        &self,
        gateway: &dyn GuildGateway,
    ) -> Result<Vec<PlayerRanking>, AppError> {
        let Some(season) = SeasonRepository::new(self.db).current().await? else {
            return Ok(Vec::new());
        };

        let stats = StatRepository::new(self.db)
            .all_for_season_by_points(season.id)
            .await?;

        let mut board = Vec::with_capacity(stats.len());
        let mut rank = 0u32;
        let mut last_points = None;
        for stat in stats {
            let Some(member) = gateway.member(&stat.member_id).await? else {
                continue;
            };
            if last_points != Some(stat.points) {
                rank += 1;
                last_points = Some(stat.points);
            }
            board.push(PlayerRanking {
                member_id: stat.member_id,
                name: member.display_name,
                avatar: member.avatar_url,
                points: stat.points,
                rank,
                stats: PlayerSeasonStats {
                    id: stat.id,
                    try1: stat.try1,
                    try2: stat.try2,
                    try3: stat.try3,
                    try4: stat.try4,
                    try5: stat.try5,
                    try6: stat.try6,
                    played: stat.played,
                    won: stat.won,
                    current_streak: stat.current_streak,
                    max_streak: stat.max_streak,
                },
            });
        }
        Ok(board)
    }
}
