//! Error types for the Rankedle backend.
//!
//! `AppError` is the top-level error type aggregating infrastructure failures
//! (database, Discord, HTTP client, media toolchain) alongside the domain
//! taxonomy in [`RankedleError`]. Most variants use `#[from]` for automatic
//! conversion at the `?` boundary.

pub mod config;
pub mod rankedle;

use thiserror::Error;

pub use config::ConfigError;
pub use rankedle::RankedleError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Domain error from the Rankedle game core (state machine, pipeline).
    #[error(transparent)]
    RankedleErr(#[from] RankedleError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed because serenity::Error is large and would inflate every other
    /// variant of this enum.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem error while handling puzzle audio artifacts.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Image decode/encode error (cover blur, waveform rendering).
    #[error(transparent)]
    ImageErr(#[from] image::ImageError),

    /// JSON (de)serialization error for stored detail records and samples.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Resource not found during result assembly.
    #[error("{0}")]
    NotFound(String),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
