pub use super::rankedle::Entity as Rankedle;
pub use super::rankedle_map::Entity as RankedleMap;
pub use super::rankedle_message::Entity as RankedleMessage;
pub use super::rankedle_score::Entity as RankedleScore;
pub use super::rankedle_season::Entity as RankedleSeason;
pub use super::rankedle_stat::Entity as RankedleStat;
