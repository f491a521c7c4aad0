use crate::data::{ScoreRepository, StatRepository};
use crate::error::{AppError, RankedleError};
use crate::model::rankedle::{GuessDetail, GuessStatus};
use crate::service::test::{game_service, BANNED_MEMBER};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::map::MapFactory,
    factory::rankedle::RankedleFactory,
    factory::score::ScoreFactory,
};

mod play;
mod submit;

/// Decodes an attempt's stored detail JSON.
fn details_of(score: &entity::rankedle_score::Model) -> Vec<GuessDetail> {
    score
        .details
        .clone()
        .map(|details| serde_json::from_value(details).unwrap())
        .unwrap_or_default()
}

/// A detail JSON payload of `count` recorded skips.
fn skip_details_json(count: i32) -> serde_json::Value {
    let details: Vec<serde_json::Value> = (0..count)
        .map(|i| serde_json::json!({ "status": "skip", "text": format!("SKIP ({})", 6 - i), "date": 0 }))
        .collect();
    serde_json::Value::Array(details)
}
