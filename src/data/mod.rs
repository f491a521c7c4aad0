//! Database repository layer for the Rankedle domain.
//!
//! Repository structs wrap a `DatabaseConnection` reference and expose the
//! queries and conditional updates the service layer builds on. All
//! persistence goes through this module; services never touch entities
//! directly for writes.

pub mod map;
pub mod message;
pub mod rankedle;
pub mod score;
pub mod season;
pub mod stat;

#[cfg(test)]
mod test;

pub use map::MapRepository;
pub use message::MessageRepository;
pub use rankedle::RankedleRepository;
pub use score::{CreateScoreParams, ScoreRepository};
pub use season::SeasonRepository;
pub use stat::StatRepository;
