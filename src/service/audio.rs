//! External audio tooling behind a trait seam.
//!
//! Transcoding, probing, and sample extraction shell out to ffmpeg/ffprobe.
//! The [`AudioToolchain`] trait lets the generation pipeline run against a
//! stub in tests instead of the real binaries.

use std::io::{Cursor, Read};
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use zip::ZipArchive;

use crate::error::RankedleError;

/// Bitrate of every encoded artifact.
const AUDIO_BITRATE: &str = "128k";
/// Leading audio below this level is treated as silence and dropped.
const SILENCE_THRESHOLD: &str = "-50dB";
/// Mono sample rate used when extracting waveform amplitudes.
const SAMPLE_RATE: u32 = 8000;

/// Audio operations the generation pipeline depends on.
#[async_trait]
pub trait AudioToolchain: Send + Sync {
    /// Re-encodes `input` to MP3, trimming leading silence and stripping all
    /// container metadata.
    async fn trim_silence(&self, input: &Path, output: &Path) -> Result<(), RankedleError>;

    /// Duration of the audio stream in seconds.
    async fn probe_duration(&self, input: &Path) -> Result<f64, RankedleError>;

    /// Cuts `duration` seconds starting at `start` into a new MP3 file.
    async fn cut_clip(
        &self,
        input: &Path,
        output: &Path,
        start: f64,
        duration: f64,
    ) -> Result<(), RankedleError>;

    /// Decodes the file to normalized mono amplitude samples in `-1.0..=1.0`.
    async fn extract_samples(&self, input: &Path) -> Result<Vec<f32>, RankedleError>;
}

/// [`AudioToolchain`] backed by the ffmpeg and ffprobe binaries.
pub struct FfmpegToolchain {
    ffmpeg: String,
    ffprobe: String,
}

impl FfmpegToolchain {
    pub fn new(ffmpeg: impl Into<String>, ffprobe: impl Into<String>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }
}

/// Runs a command to completion, mapping a non-zero exit into a transcode
/// error carrying the last stderr line.
async fn run(command: &mut Command, context: &str) -> Result<Vec<u8>, RankedleError> {
    let output = command
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|err| RankedleError::Transcode(format!("{context}: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = stderr.trim().lines().last().unwrap_or("unknown error").to_string();
        return Err(RankedleError::Transcode(format!("{context}: {reason}")));
    }

    Ok(output.stdout)
}

#[async_trait]
impl AudioToolchain for FfmpegToolchain {
    async fn trim_silence(&self, input: &Path, output: &Path) -> Result<(), RankedleError> {
        run(
            Command::new(&self.ffmpeg)
                .arg("-y")
                .arg("-i")
                .arg(input)
                .args(["-af", &format!("silenceremove=1:0:{SILENCE_THRESHOLD}")])
                .args(["-map_metadata", "-1"])
                .args(["-map", "0:a"])
                .args(["-codec:a", "libmp3lame"])
                .args(["-b:a", AUDIO_BITRATE])
                .arg(output),
            "trim silence",
        )
        .await?;
        Ok(())
    }

    async fn probe_duration(&self, input: &Path) -> Result<f64, RankedleError> {
        let stdout = run(
            Command::new(&self.ffprobe)
                .args(["-v", "error"])
                .args(["-show_entries", "format=duration"])
                .args(["-of", "default=noprint_wrappers=1:nokey=1"])
                .arg(input),
            "probe duration",
        )
        .await?;

        let text = String::from_utf8_lossy(&stdout);
        text.trim()
            .parse::<f64>()
            .map_err(|err| RankedleError::Transcode(format!("probe duration: {err}")))
    }

    async fn cut_clip(
        &self,
        input: &Path,
        output: &Path,
        start: f64,
        duration: f64,
    ) -> Result<(), RankedleError> {
        run(
            Command::new(&self.ffmpeg)
                .arg("-y")
                .args(["-ss", &start.to_string()])
                .arg("-i")
                .arg(input)
                .args(["-t", &duration.to_string()])
                .args(["-codec:a", "libmp3lame"])
                .args(["-b:a", AUDIO_BITRATE])
                .arg(output),
            "cut clip",
        )
        .await?;
        Ok(())
    }

    async fn extract_samples(&self, input: &Path) -> Result<Vec<f32>, RankedleError> {
        let stdout = run(
            Command::new(&self.ffmpeg)
                .arg("-i")
                .arg(input)
                .args(["-ac", "1"])
                .args(["-ar", &SAMPLE_RATE.to_string()])
                .args(["-f", "s16le"])
                .args(["-acodec", "pcm_s16le"])
                .arg("pipe:1"),
            "extract samples",
        )
        .await?;

        let samples = stdout
            .chunks_exact(2)
            .map(|chunk| {
                let value = i16::from_le_bytes([chunk[0], chunk[1]]);
                f32::from(value) / f32::from(i16::MAX)
            })
            .collect();
        Ok(samples)
    }
}

/// Extracts the first archive entry whose name ends with `suffix`.
///
/// Map archives bundle the audio track alongside charts and cover art; only
/// the audio entry is needed.
pub fn extract_audio_entry(archive: &[u8], suffix: &str) -> Result<Vec<u8>, RankedleError> {
    let mut zip = ZipArchive::new(Cursor::new(archive))
        .map_err(|err| RankedleError::Extraction(err.to_string()))?;

    for index in 0..zip.len() {
        let mut entry = zip
            .by_index(index)
            .map_err(|err| RankedleError::Extraction(err.to_string()))?;
        if !entry.name().ends_with(suffix) {
            continue;
        }

        let mut content = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut content)
            .map_err(|err| RankedleError::Extraction(err.to_string()))?;
        return Ok(content);
    }

    Err(RankedleError::Extraction(format!(
        "no archive entry matching {suffix}"
    )))
}
