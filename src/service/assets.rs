use std::path::{Path, PathBuf};

/// Filesystem layout of generated puzzle audio artifacts.
///
/// Every artifact set is keyed by puzzle id under the root directory, so a
/// puzzle rollover never overwrites the previous day's files:
/// `{root}/puzzles/{id}/{song.mp3, preview_full.mp3, clip_0..5.mp3, samples.json}`.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn puzzle_dir(&self, rankedle_id: i32) -> PathBuf {
        self.root.join("puzzles").join(rankedle_id.to_string())
    }

    /// The canonical silence-trimmed song audio.
    pub fn song(&self, rankedle_id: i32) -> PathBuf {
        self.puzzle_dir(rankedle_id).join("song.mp3")
    }

    /// The 30-second preview window cut from the song.
    pub fn preview_full(&self, rankedle_id: i32) -> PathBuf {
        self.puzzle_dir(rankedle_id).join("preview_full.mp3")
    }

    /// One of the six progressively longer reveal clips (steps 0..=5).
    pub fn clip(&self, rankedle_id: i32, step: usize) -> PathBuf {
        self.puzzle_dir(rankedle_id).join(format!("clip_{step}.mp3"))
    }

    /// JSON-encoded amplitude samples of the full preview.
    pub fn samples(&self, rankedle_id: i32) -> PathBuf {
        self.puzzle_dir(rankedle_id).join("samples.json")
    }
}
