//! Core game types: reveal-step details, result glyphs, scoring table and
//! the DTOs returned by the game services.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Points awarded at a won outcome, indexed by skip count 0..6. A win after
/// exhausting every reveal step is worth nothing.
pub const POINTS: [i32; 7] = [8, 6, 4, 3, 2, 1, 0];

/// Maximum skip count; reaching it exhausts the attempt.
pub const MAX_SKIPS: i32 = 6;

/// Number of reveal steps (preview clips 0..=5).
pub const REVEAL_STEPS: usize = 6;

/// Status of one recorded reveal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessStatus {
    /// The player deferred with the skip button.
    Skip,
    /// The player submitted a wrong map.
    Fail,
}

/// One reveal-step record stored on an attempt, in order of occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessDetail {
    pub status: GuessStatus,
    /// Display label: `SKIP (N)` with N remaining steps, or the guessed
    /// song's display name.
    pub text: String,
    /// The wrongly guessed map, when `status` is `fail`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<i32>,
    /// Unix timestamp of the action.
    pub date: i64,
}

/// Six result slots derived from an attempt, used for the completion screen,
/// share text and history glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSlot {
    Skip,
    Fail,
    Success,
}

/// Derives the six step slots from the recorded details and outcome.
///
/// Details fill slots in order; a won outcome additionally marks the slot at
/// the final skip count as success.
pub fn step_slots(
    details: &[GuessDetail],
    skips: i32,
    success: Option<bool>,
) -> [Option<StepSlot>; REVEAL_STEPS] {
    let mut slots = [None; REVEAL_STEPS];
    for (slot, detail) in slots.iter_mut().zip(details) {
        *slot = Some(match detail.status {
            GuessStatus::Skip => StepSlot::Skip,
            GuessStatus::Fail => StepSlot::Fail,
        });
    }
    if success == Some(true) {
        if let Some(slot) = slots.get_mut(skips as usize) {
            *slot = Some(StepSlot::Success);
        }
    }
    slots
}

/// Renders the full glyph row: a leading volume glyph followed by one block
/// glyph per reveal step.
pub fn score_glyphs(details: &[GuessDetail], skips: i32, success: Option<bool>) -> Vec<String> {
    let volume = match success {
        Some(true) if skips == 0 => "🔊",
        Some(true) => "🔉",
        _ => "🔇",
    };

    let mut glyphs = vec![volume.to_string()];
    glyphs.extend(step_slots(details, skips, success).iter().map(|s| {
        match s {
            Some(StepSlot::Skip) => "⬛",
            Some(StepSlot::Fail) => "🟥",
            Some(StepSlot::Success) => "🟩",
            None => "⬜",
        }
        .to_string()
    }));
    glyphs
}

/// `Artist - Song` display string, with the subtitle appended when present.
pub fn song_display_name(map: &entity::rankedle_map::Model) -> String {
    if map.song_sub_name.is_empty() {
        format!("{} - {}", map.song_author_name, map.song_name)
    } else {
        format!(
            "{} - {} {}",
            map.song_author_name, map.song_name, map.song_sub_name
        )
    }
}

/// A player's progress on the current puzzle.
#[derive(Debug, Clone, Serialize)]
pub struct DailyState {
    pub rankedle_id: i32,
    pub skips: i32,
    pub details: Vec<GuessDetail>,
    pub hint: bool,
    pub success: Option<bool>,
}

/// Cosmetic message shown on attempt completion. The image, when present, is
/// a base64 data URL.
#[derive(Debug, Clone, Serialize)]
pub struct FlavorMessage {
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Map summary attached to a finished attempt's result.
#[derive(Debug, Clone, Serialize)]
pub struct ResultMap {
    pub id: i32,
    pub cover: String,
    pub song_name: String,
    pub level_author_name: String,
}

/// Completion-screen payload for a finished attempt.
#[derive(Debug, Clone, Serialize)]
pub struct RankedleResult {
    pub won: bool,
    pub skips: i32,
    pub score: Vec<String>,
    pub points: i32,
    pub map: ResultMap,
    pub message: Option<FlavorMessage>,
}

/// Autocomplete suggestion for the guess input.
#[derive(Debug, Clone, Serialize)]
pub struct SongSuggestion {
    pub id: i32,
    pub name: String,
}

/// One puzzle in a player's history view.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: i32,
    pub cover: String,
    pub song_name: String,
    pub level_author_name: String,
    /// Glyph row for the player's attempt, if any.
    pub score: Option<Vec<String>>,
    pub date: NaiveDate,
}

/// Reverse-chronological page of the puzzle history.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryPage {
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
    pub entries: Vec<HistoryEntry>,
}

/// Per-season counters exposed on the ranking view.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeasonStats {
    pub id: i32,
    pub try1: i32,
    pub try2: i32,
    pub try3: i32,
    pub try4: i32,
    pub try5: i32,
    pub try6: i32,
    pub played: i32,
    pub won: i32,
    pub current_streak: i32,
    pub max_streak: i32,
}

/// One row of the season leaderboard with dense competition rank.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerRanking {
    pub member_id: String,
    pub name: String,
    pub avatar: String,
    pub points: i32,
    pub rank: u32,
    pub stats: PlayerSeasonStats,
}
