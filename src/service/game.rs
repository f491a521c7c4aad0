//! The daily puzzle state machine: skip, submit, hint, result, share and
//! history, all scoped to the puzzle dated today.

use std::path::PathBuf;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::data::{
    CreateScoreParams, MapRepository, MessageRepository, RankedleRepository, ScoreRepository,
};
use crate::error::{AppError, RankedleError};
use crate::model::rankedle::{
    score_glyphs, song_display_name, DailyState, FlavorMessage, GuessDetail, GuessStatus,
    HistoryEntry, HistoryPage, RankedleResult, ResultMap, SongSuggestion, MAX_SKIPS, POINTS,
};
use crate::service::assets::AssetPaths;
use crate::service::cover;
use crate::service::discord::GuildGateway;
use crate::service::scoring::StatService;
use crate::service::waveform;
use crate::util::mime::sniff_image;

/// Flavor message pools keyed by how the attempt ended.
const MESSAGE_KIND_FIRST_TRY: &str = "first_try";
const MESSAGE_KIND_WON: &str = "won";
const MESSAGE_KIND_LOSE: &str = "lose";

/// Page size of the history view when the caller passes no limit.
pub const DEFAULT_HISTORY_LIMIT: u64 = 8;

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
    assets: AssetPaths,
    gateway: Arc<dyn GuildGateway>,
    http: reqwest::Client,
    banned_members: Vec<String>,
    site_url: String,
}

impl<'a> GameService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        assets: AssetPaths,
        gateway: Arc<dyn GuildGateway>,
        http: reqwest::Client,
        banned_members: Vec<String>,
        site_url: String,
    ) -> Self {
        Self {
            db,
            assets,
            gateway,
            http,
            banned_members,
            site_url,
        }
    }

    /// Today's puzzle, or [`RankedleError::NoActivePuzzle`] when none is
    /// dated today.
    pub async fn current(&self) -> Result<entity::rankedle::Model, AppError> {
        RankedleRepository::new(self.db)
            .current()
            .await?
            .ok_or_else(|| RankedleError::NoActivePuzzle.into())
    }

    /// The player's progress on today's puzzle, `None` before the first
    /// action.
    pub async fn daily_state(&self, member_id: &str) -> Result<Option<DailyState>, AppError> {
        let rankedle = self.current().await?;
        let Some(score) = ScoreRepository::new(self.db).find(rankedle.id, member_id).await? else {
            return Ok(None);
        };

        Ok(Some(DailyState {
            rankedle_id: rankedle.id,
            skips: score.skips,
            details: parse_details(&score),
            hint: score.hint,
            success: score.success,
        }))
    }

    /// Resolves the audio file the player is allowed to hear: the clip for
    /// the current reveal step while in progress, the full preview once the
    /// attempt is terminal. Creates the attempt on first listen.
    pub async fn play(&self, member_id: &str) -> Result<PathBuf, AppError> {
        let rankedle = self.current().await?;
        let repo = ScoreRepository::new(self.db);

        let score = match repo.find(rankedle.id, member_id).await? {
            Some(score) => score,
            None => {
                repo.create(CreateScoreParams {
                    rankedle_id: rankedle.id,
                    member_id: member_id.to_string(),
                    skips: 0,
                    details: Vec::new(),
                    success: None,
                    message_id: None,
                })
                .await?
            }
        };

        let path = if score.success.is_some() {
            self.assets.preview_full(rankedle.id)
        } else {
            self.assets.clip(rankedle.id, score.skips.clamp(0, 5) as usize)
        };
        Ok(path)
    }

    /// Consumes one reveal step without guessing.
    ///
    /// Skipping with every step already consumed exhausts the attempt as a
    /// loss. Skipping a terminal attempt is a no-op.
    pub async fn skip(&self, member_id: &str) -> Result<entity::rankedle_score::Model, AppError> {
        let rankedle = self.current().await?;
        self.ensure_not_banned(member_id)?;
        let repo = ScoreRepository::new(self.db);

        let Some(score) = repo.find(rankedle.id, member_id).await? else {
            let detail = GuessDetail {
                status: GuessStatus::Skip,
                text: format!("SKIP ({MAX_SKIPS})"),
                map_id: None,
                date: Utc::now().timestamp(),
            };
            return Ok(repo
                .create(CreateScoreParams {
                    rankedle_id: rankedle.id,
                    member_id: member_id.to_string(),
                    skips: 1,
                    details: vec![detail],
                    success: None,
                    message_id: None,
                })
                .await?);
        };

        if score.success.is_some() {
            return Ok(score);
        }

        if score.skips >= MAX_SKIPS {
            let message_id = self.random_message_id(MESSAGE_KIND_LOSE).await?;
            if repo.close(score.id, false, message_id).await? {
                self.on_terminal(&rankedle, score.id).await?;
            }
        } else {
            let mut details = parse_details(&score);
            details.push(GuessDetail {
                status: GuessStatus::Skip,
                text: format!("SKIP ({})", MAX_SKIPS - score.skips),
                map_id: None,
                date: Utc::now().timestamp(),
            });
            repo.advance_step(score.id, score.skips + 1, &details).await?;
        }

        self.reload(score.id).await
    }

    /// Submits a guess for today's puzzle.
    ///
    /// Correctness is metadata equality on (artist, song title), so any
    /// reissue of the same song counts as a win. A correct guess with steps
    /// remaining wins; any submission with all six steps consumed loses; a
    /// wrong guess otherwise records a fail step.
    pub async fn submit(
        &self,
        member_id: &str,
        map_id: i32,
    ) -> Result<entity::rankedle_score::Model, AppError> {
        let rankedle = self.current().await?;
        self.ensure_not_banned(member_id)?;

        let map_repo = MapRepository::new(self.db);
        let guessed = map_repo
            .find_by_id(map_id)
            .await?
            .ok_or_else(|| RankedleError::NotFound(format!("map {map_id}")))?;
        let answer = map_repo
            .find_by_id(rankedle.map_id)
            .await?
            .ok_or_else(|| RankedleError::NotFound(format!("map {}", rankedle.map_id)))?;

        let correct = guessed.song_author_name == answer.song_author_name
            && guessed.song_name == answer.song_name;

        let repo = ScoreRepository::new(self.db);
        let Some(score) = repo.find(rankedle.id, member_id).await? else {
            if correct {
                let message_id = self.random_message_id(MESSAGE_KIND_FIRST_TRY).await?;
                let score = repo
                    .create(CreateScoreParams {
                        rankedle_id: rankedle.id,
                        member_id: member_id.to_string(),
                        skips: 0,
                        details: Vec::new(),
                        success: Some(true),
                        message_id,
                    })
                    .await?;
                self.on_terminal(&rankedle, score.id).await?;
                return self.reload(score.id).await;
            }

            let detail = GuessDetail {
                status: GuessStatus::Fail,
                text: song_display_name(&guessed),
                map_id: Some(guessed.id),
                date: Utc::now().timestamp(),
            };
            return Ok(repo
                .create(CreateScoreParams {
                    rankedle_id: rankedle.id,
                    member_id: member_id.to_string(),
                    skips: 1,
                    details: vec![detail],
                    success: None,
                    message_id: None,
                })
                .await?);
        };

        if score.success.is_some() {
            return Ok(score);
        }

        if correct && score.skips < MAX_SKIPS {
            let kind = if score.skips == 0 {
                MESSAGE_KIND_FIRST_TRY
            } else {
                MESSAGE_KIND_WON
            };
            let message_id = self.random_message_id(kind).await?;
            if repo.close(score.id, true, message_id).await? {
                self.on_terminal(&rankedle, score.id).await?;
            }
        } else if score.skips >= MAX_SKIPS {
            let message_id = self.random_message_id(MESSAGE_KIND_LOSE).await?;
            if repo.close(score.id, false, message_id).await? {
                self.on_terminal(&rankedle, score.id).await?;
            }
        } else {
            let mut details = parse_details(&score);
            details.push(GuessDetail {
                status: GuessStatus::Fail,
                text: song_display_name(&guessed),
                map_id: Some(guessed.id),
                date: Utc::now().timestamp(),
            });
            repo.advance_step(score.id, score.skips + 1, &details).await?;
        }

        self.reload(score.id).await
    }

    /// Marks the hint as redeemed and returns the cover URL to blur.
    ///
    /// Only available at exactly five consumed steps; redeeming twice keeps a
    /// single flag set.
    pub async fn redeem_hint(&self, member_id: &str) -> Result<String, AppError> {
        let rankedle = self.current().await?;
        let repo = ScoreRepository::new(self.db);

        let score = repo
            .find(rankedle.id, member_id)
            .await?
            .ok_or(RankedleError::Forbidden)?;
        if score.skips != MAX_SKIPS - 1 {
            return Err(RankedleError::Forbidden.into());
        }

        if !score.hint {
            repo.redeem_hint(score.id).await?;
        }

        let map = MapRepository::new(self.db)
            .find_by_id(rankedle.map_id)
            .await?
            .ok_or_else(|| RankedleError::NotFound(format!("map {}", rankedle.map_id)))?;
        Ok(map.cover_url)
    }

    /// The blurred cover hint as base64 JPEG.
    pub async fn hint(&self, member_id: &str) -> Result<String, AppError> {
        let cover_url = self.redeem_hint(member_id).await?;
        let original = self
            .http
            .get(&cover_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        cover::blur_cover_base64(&original)
    }

    /// Completion-screen payload. `None` while the attempt is missing or
    /// still in progress, so the answer never leaks early.
    pub async fn result(&self, member_id: &str) -> Result<Option<RankedleResult>, AppError> {
        let Some(rankedle) = RankedleRepository::new(self.db).current().await? else {
            return Ok(None);
        };
        let Some(score) = ScoreRepository::new(self.db).find(rankedle.id, member_id).await? else {
            return Ok(None);
        };
        let Some(won) = score.success else {
            return Ok(None);
        };

        let map = MapRepository::new(self.db)
            .find_by_id(rankedle.map_id)
            .await?
            .ok_or_else(|| RankedleError::NotFound(format!("map {}", rankedle.map_id)))?;

        let message = match score.message_id {
            Some(id) => self.flavor_message(id).await?,
            None => None,
        };

        let details = parse_details(&score);
        Ok(Some(RankedleResult {
            won,
            skips: score.skips,
            score: score_glyphs(&details, score.skips, score.success),
            points: if won {
                POINTS[score.skips.clamp(0, MAX_SKIPS) as usize]
            } else {
                0
            },
            map: ResultMap {
                id: map.id,
                cover: map.cover_url.clone(),
                song_name: song_display_name(&map),
                level_author_name: map.level_author_name,
            },
            message,
        }))
    }

    /// Spoiler-free share text for a finished attempt.
    pub async fn share_text(&self, member_id: &str) -> Result<Option<String>, AppError> {
        let Some(rankedle) = RankedleRepository::new(self.db).current().await? else {
            return Ok(None);
        };
        let Some(score) = ScoreRepository::new(self.db).find(rankedle.id, member_id).await? else {
            return Ok(None);
        };
        if score.success.is_none() {
            return Ok(None);
        }

        let glyphs = score_glyphs(&parse_details(&score), score.skips, score.success).join(" ");
        Ok(Some(format!(
            "Rankedle #{}\n\n{}\n\n<{}/rankedle>",
            rankedle.id, glyphs, self.site_url
        )))
    }

    /// Reverse-chronological page of past puzzles with the player's glyph
    /// rows. Today's puzzle only appears once the player's own attempt is
    /// terminal.
    pub async fn history(
        &self,
        member_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<HistoryPage, AppError> {
        let today = Utc::now().date_naive();
        let rankedle_repo = RankedleRepository::new(self.db);
        let score_repo = ScoreRepository::new(self.db);

        let include_today = match rankedle_repo.current().await? {
            Some(rankedle) => score_repo
                .find(rankedle.id, member_id)
                .await?
                .is_some_and(|score| score.success.is_some()),
            None => true,
        };
        let max_date = if include_today {
            today
        } else {
            today.pred_opt().unwrap_or(today)
        };

        let (rows, total) = rankedle_repo.history_page(max_date, offset, limit).await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (rankedle, map) in rows {
            let map = map.ok_or_else(|| {
                AppError::NotFound(format!("map for puzzle {}", rankedle.id))
            })?;
            let glyphs = score_repo
                .find(rankedle.id, member_id)
                .await?
                .map(|score| score_glyphs(&parse_details(&score), score.skips, score.success));

            entries.push(HistoryEntry {
                id: rankedle.id,
                cover: map.cover_url.clone(),
                song_name: song_display_name(&map),
                level_author_name: map.level_author_name,
                score: glyphs,
                date: rankedle.date.unwrap_or(today),
            });
        }

        Ok(HistoryPage {
            total,
            offset,
            limit,
            entries,
        })
    }

    /// Autocomplete suggestions for the guess input, excluding maps the
    /// player already guessed wrong today.
    pub async fn song_suggestions(
        &self,
        member_id: &str,
        query: &str,
    ) -> Result<Vec<SongSuggestion>, AppError> {
        let rankedle = self.current().await?;

        let excluded: Vec<i32> = match ScoreRepository::new(self.db)
            .find(rankedle.id, member_id)
            .await?
        {
            Some(score) => parse_details(&score)
                .iter()
                .filter_map(|detail| detail.map_id)
                .collect(),
            None => Vec::new(),
        };

        let maps = MapRepository::new(self.db).search(query, &excluded).await?;
        Ok(maps
            .into_iter()
            .map(|map| SongSuggestion {
                name: song_display_name(&map),
                id: map.id,
            })
            .collect())
    }

    /// Renders the waveform PNG of today's preview from the stored amplitude
    /// samples.
    pub async fn waveform(
        &self,
        mode: waveform::RenderMode,
        bar_count: usize,
        bar_width: u32,
        bar_gap: u32,
    ) -> Result<Vec<u8>, AppError> {
        let rankedle = self.current().await?;
        let raw = tokio::fs::read(self.assets.samples(rankedle.id)).await?;
        let samples: Vec<f32> = serde_json::from_slice(&raw)?;
        waveform::render(&samples, mode, bar_count, bar_width, bar_gap)
    }

    fn ensure_not_banned(&self, member_id: &str) -> Result<(), AppError> {
        if self.banned_members.iter().any(|banned| banned == member_id) {
            return Err(RankedleError::Forbidden.into());
        }
        Ok(())
    }

    async fn reload(&self, score_id: i32) -> Result<entity::rankedle_score::Model, AppError> {
        ScoreRepository::new(self.db)
            .find_by_id(score_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("attempt {score_id}")))
    }

    async fn random_message_id(&self, kind: &str) -> Result<Option<i32>, AppError> {
        Ok(MessageRepository::new(self.db)
            .random_by_kind(kind)
            .await?
            .map(|message| message.id))
    }

    /// Terminal side effects, fired once by whoever wins the close race:
    /// fold the attempt into season stats, then resync who can see the
    /// results channel. A gateway failure is logged but never rolls back the
    /// game state.
    async fn on_terminal(
        &self,
        rankedle: &entity::rankedle::Model,
        score_id: i32,
    ) -> Result<(), AppError> {
        let score = self.reload(score_id).await?;
        StatService::new(self.db)
            .update_player_stats(rankedle, &score)
            .await?;

        let finished: Vec<String> = ScoreRepository::new(self.db)
            .all_for_rankedle(rankedle.id)
            .await?
            .into_iter()
            .filter(|score| score.success.is_some())
            .map(|score| score.member_id)
            .collect();
        if let Err(err) = self.gateway.sync_results_channel(&finished).await {
            tracing::warn!("Failed to sync results channel visibility: {}", err);
        }
        Ok(())
    }

    async fn flavor_message(&self, message_id: i32) -> Result<Option<FlavorMessage>, AppError> {
        let Some(message) = MessageRepository::new(self.db).find_by_id(message_id).await? else {
            return Ok(None);
        };

        let image = message.image.as_deref().map(|bytes| {
            let mime = sniff_image(bytes).unwrap_or("application/octet-stream");
            format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
        });
        Ok(Some(FlavorMessage {
            content: message.content,
            image,
        }))
    }
}

/// Decodes the stored detail JSON; malformed or absent details read as an
/// empty list rather than poisoning the attempt.
pub(crate) fn parse_details(score: &entity::rankedle_score::Model) -> Vec<GuessDetail> {
    score
        .details
        .as_ref()
        .and_then(|details| serde_json::from_value(details.clone()).ok())
        .unwrap_or_default()
}
