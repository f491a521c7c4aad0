//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a dated puzzle with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Season
/// 2. Map
/// 3. Rankedle dated today
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((season, map, rankedle))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_rankedle_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::rankedle_season::Model,
        entity::rankedle_map::Model,
        entity::rankedle::Model,
    ),
    DbErr,
> {
    let season = crate::factory::season::create_season(db).await?;
    let map = crate::factory::map::create_map(db).await?;
    let rankedle = crate::factory::rankedle::create_rankedle(db, season.id, map.id).await?;

    Ok((season, map, rankedle))
}
