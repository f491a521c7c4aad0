//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let season = factory::season::create_season(&db).await?;
//!     let map = factory::map::create_map(&db).await?;
//!
//!     // Create with all dependencies
//!     let (season, map, rankedle) =
//!         factory::helpers::create_rankedle_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let map = factory::map::MapFactory::new(&db)
//!     .song_name("Custom Song")
//!     .song_author_name("Custom Artist")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `season` - Create season entities
//! - `map` - Create map entities
//! - `rankedle` - Create daily puzzle entities
//! - `score` - Create attempt entities
//! - `stat` - Create per-season stat entities
//! - `message` - Create flavor message entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod map;
pub mod message;
pub mod rankedle;
pub mod score;
pub mod season;
pub mod stat;

// Re-export commonly used factory functions for concise usage
pub use map::create_map;
pub use message::create_message;
pub use rankedle::create_rankedle;
pub use score::create_score;
pub use season::create_season;
pub use stat::create_stat;
