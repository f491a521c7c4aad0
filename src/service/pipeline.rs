//! Daily puzzle generation: settle the previous puzzle, pick an unplayed
//! map, download and transcode its audio, and stage every artifact before
//! the puzzle row exists.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::data::{MapRepository, RankedleRepository, SeasonRepository};
use crate::error::{AppError, RankedleError};
use crate::service::assets::AssetPaths;
use crate::service::audio::{self, AudioToolchain};
use crate::service::scoring::StatService;

/// Reveal clip lengths in seconds, one per skip step.
pub const CLIP_SECONDS: [f64; 6] = [1.0, 2.0, 4.0, 7.0, 11.0, 16.0];
/// Length of the preview window all clips are cut from.
pub const PREVIEW_SECONDS: f64 = 30.0;
/// Archive entry suffix of the audio track inside a map archive.
const AUDIO_ENTRY_SUFFIX: &str = ".egg";

pub struct GenerationService<'a> {
    db: &'a DatabaseConnection,
    http: reqwest::Client,
    toolchain: Arc<dyn AudioToolchain>,
    assets: AssetPaths,
}

impl<'a> GenerationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http: reqwest::Client,
        toolchain: Arc<dyn AudioToolchain>,
        assets: AssetPaths,
    ) -> Self {
        Self {
            db,
            http,
            toolchain,
            assets,
        }
    }

    /// Generates the next puzzle, logging instead of propagating failures so
    /// a broken map or network hiccup never takes the scheduler down.
    pub async fn generate(&self, map_id: Option<i32>) {
        match self.generate_inner(map_id).await {
            Ok(rankedle) => {
                tracing::info!(rankedle_id = rankedle.id, "Generated next daily puzzle")
            }
            Err(err) => tracing::error!("Failed to generate daily puzzle: {}", err),
        }
    }

    async fn generate_inner(
        &self,
        map_id: Option<i32>,
    ) -> Result<entity::rankedle::Model, AppError> {
        // Settle the previous puzzle's open attempts first.
        StatService::new(self.db).finish().await?;

        let map = MapRepository::new(self.db)
            .random_unplayed(map_id)
            .await?
            .ok_or(RankedleError::NoCandidateMap)?;
        let season = SeasonRepository::new(self.db)
            .current()
            .await?
            .ok_or_else(|| AppError::NotFound("current season".to_string()))?;

        let archive = self.download(&map.download_url).await?;
        let track = audio::extract_audio_entry(&archive, AUDIO_ENTRY_SUFFIX)?;

        let staging = tempfile::tempdir()?;
        let track_path = staging.path().join("track.egg");
        tokio::fs::write(&track_path, &track).await?;

        let song_path = staging.path().join("song.mp3");
        self.toolchain.trim_silence(&track_path, &song_path).await?;
        tokio::fs::remove_file(&track_path).await?;

        let duration = self.toolchain.probe_duration(&song_path).await?.floor();
        let start = if duration > PREVIEW_SECONDS {
            rand::rng().random_range(0.0..=(duration - PREVIEW_SECONDS)).round()
        } else {
            0.0
        };

        let preview_path = staging.path().join("preview_full.mp3");
        self.toolchain
            .cut_clip(&song_path, &preview_path, start, PREVIEW_SECONDS)
            .await?;

        for (step, seconds) in CLIP_SECONDS.iter().enumerate() {
            let clip_path = staging.path().join(format!("clip_{step}.mp3"));
            self.toolchain
                .cut_clip(&preview_path, &clip_path, 0.0, *seconds)
                .await?;
        }

        let samples = self.toolchain.extract_samples(&preview_path).await?;
        tokio::fs::write(
            staging.path().join("samples.json"),
            serde_json::to_vec(&samples)?,
        )
        .await?;

        // Every artifact is staged; the puzzle row is the last database
        // write, so a crash above leaves no half-provisioned puzzle behind.
        let rankedle = RankedleRepository::new(self.db).create(map.id, season.id).await?;

        let destination = self.assets.puzzle_dir(rankedle.id);
        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        move_dir(staging.path(), &destination).await?;

        Ok(rankedle)
    }

    /// Dates the oldest undated puzzle with today, making it live. Returns
    /// `None` when today already has a puzzle or no puzzle is waiting.
    pub async fn publish_due_puzzle(&self) -> Result<Option<entity::rankedle::Model>, AppError> {
        let repo = RankedleRepository::new(self.db);
        let today = Utc::now().date_naive();

        if repo.find_by_date(today).await?.is_some() {
            return Ok(None);
        }
        Ok(repo.assign_date_to_oldest_undated(today).await?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RankedleError::Download {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Moves a staged artifact directory into place, falling back to a per-file
/// copy when the staging dir sits on a different filesystem.
async fn move_dir(source: &Path, destination: &Path) -> Result<(), std::io::Error> {
    if tokio::fs::rename(source, destination).await.is_ok() {
        return Ok(());
    }

    tokio::fs::create_dir_all(destination).await?;
    let mut entries = tokio::fs::read_dir(source).await?;
    while let Some(entry) = entries.next_entry().await? {
        tokio::fs::copy(entry.path(), destination.join(entry.file_name())).await?;
    }
    Ok(())
}
