use crate::data::score::{CreateScoreParams, ScoreRepository};
use crate::model::rankedle::{GuessDetail, GuessStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::score::ScoreFactory};

mod close;
mod mark_ended;

fn skip_detail(remaining: i32) -> GuessDetail {
    GuessDetail {
        status: GuessStatus::Skip,
        text: format!("SKIP ({remaining})"),
        map_id: None,
        date: 0,
    }
}
