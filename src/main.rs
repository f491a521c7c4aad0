use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rankedle::config::Config;
use rankedle::error::AppError;
use rankedle::service::assets::AssetPaths;
use rankedle::service::audio::{AudioToolchain, FfmpegToolchain};
use rankedle::{scheduler, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client();

    let toolchain: Arc<dyn AudioToolchain> =
        Arc::new(FfmpegToolchain::new(&config.ffmpeg_path, &config.ffprobe_path));
    let assets = AssetPaths::new(&config.assets_dir);

    tracing::info!("Starting Rankedle backend");
    let _scheduler = scheduler::daily::start(db.clone(), http_client, toolchain, assets).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    Ok(())
}
