use crate::error::{config::ConfigError, AppError};

const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";
const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

pub struct Config {
    pub database_url: String,

    pub discord_token: String,
    pub discord_guild_id: u64,

    /// Channel whose visibility is recomputed after each finished attempt.
    pub results_channel_id: u64,
    pub everyone_role_id: u64,
    pub admin_role_id: u64,

    /// Players rejected from skip/submit, from configuration rather than a
    /// hardcoded list.
    pub banned_member_ids: Vec<String>,

    /// Root directory for generated puzzle audio artifacts.
    pub assets_dir: String,

    /// Base URL of the website, used in share text.
    pub site_url: String,

    pub ffmpeg_path: String,
    pub ffprobe_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_token: require("DISCORD_TOKEN")?,
            discord_guild_id: require_u64("DISCORD_GUILD_ID")?,
            results_channel_id: require_u64("RANKEDLE_RESULTS_CHANNEL_ID")?,
            everyone_role_id: require_u64("RANKEDLE_EVERYONE_ROLE_ID")?,
            admin_role_id: require_u64("RANKEDLE_ADMIN_ROLE_ID")?,
            banned_member_ids: std::env::var("RANKEDLE_BANNED_MEMBER_IDS")
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            assets_dir: require("RANKEDLE_ASSETS_DIR")?,
            site_url: require("RANKEDLE_SITE_URL")?,
            ffmpeg_path: std::env::var("FFMPEG_PATH")
                .unwrap_or_else(|_| DEFAULT_FFMPEG_PATH.to_string()),
            ffprobe_path: std::env::var("FFPROBE_PATH")
                .unwrap_or_else(|_| DEFAULT_FFPROBE_PATH.to_string()),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_u64(name: &str) -> Result<u64, ConfigError> {
    let value = require(name)?;
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
