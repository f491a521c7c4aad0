//! Midnight rollover job: settle yesterday's puzzle, generate the next one
//! and publish the puzzle due today.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;
use crate::service::assets::AssetPaths;
use crate::service::audio::AudioToolchain;
use crate::service::pipeline::GenerationService;

/// Fires at midnight UTC every day.
const ROLLOVER_CRON: &str = "0 0 0 * * *";

/// Starts the daily rollover scheduler. The returned handle must be kept
/// alive for the jobs to keep running.
pub async fn start(
    db: DatabaseConnection,
    http: reqwest::Client,
    toolchain: Arc<dyn AudioToolchain>,
    assets: AssetPaths,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(ROLLOVER_CRON, move |_id, _lock| {
        let db = db.clone();
        let http = http.clone();
        let toolchain = toolchain.clone();
        let assets = assets.clone();
        Box::pin(async move {
            tracing::info!("Running daily puzzle rollover");
            let service = GenerationService::new(&db, http, toolchain, assets);
            service.generate(None).await;
            match service.publish_due_puzzle().await {
                Ok(Some(rankedle)) => {
                    tracing::info!(rankedle_id = rankedle.id, "Published today's puzzle")
                }
                Ok(None) => tracing::info!("No puzzle published; today is already covered"),
                Err(err) => tracing::error!("Failed to publish today's puzzle: {}", err),
            }
        })
    })?;
    scheduler.add(job).await?;
    scheduler.start().await?;

    Ok(scheduler)
}
