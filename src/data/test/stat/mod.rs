use crate::data::stat::StatRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::stat::StatFactory};

mod all_for_season_by_points;
mod get_or_create;
