//! SeaORM entity models for the Rankedle database.

pub mod prelude;

pub mod rankedle;
pub mod rankedle_map;
pub mod rankedle_message;
pub mod rankedle_score;
pub mod rankedle_season;
pub mod rankedle_stat;
