pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_rankedle_season_table;
mod m20260115_000002_create_rankedle_map_table;
mod m20260115_000003_create_rankedle_message_table;
mod m20260115_000004_create_rankedle_table;
mod m20260115_000005_create_rankedle_score_table;
mod m20260115_000006_create_rankedle_stat_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_rankedle_season_table::Migration),
            Box::new(m20260115_000002_create_rankedle_map_table::Migration),
            Box::new(m20260115_000003_create_rankedle_message_table::Migration),
            Box::new(m20260115_000004_create_rankedle_table::Migration),
            Box::new(m20260115_000005_create_rankedle_score_table::Migration),
            Box::new(m20260115_000006_create_rankedle_stat_table::Migration),
        ]
    }
}
