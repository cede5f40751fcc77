pub use sea_orm_migration::prelude::*;

mod m20230301_000001_create_user_table;
mod m20230301_000002_create_planet_table;
mod m20230301_000003_create_character_table;
mod m20230301_000004_create_favorite_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230301_000001_create_user_table::Migration),
            Box::new(m20230301_000002_create_planet_table::Migration),
            Box::new(m20230301_000003_create_character_table::Migration),
            Box::new(m20230301_000004_create_favorite_table::Migration),
        ]
    }
}
