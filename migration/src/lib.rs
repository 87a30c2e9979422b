pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_role_table;
mod m20250601_000002_create_user_table;
mod m20250601_000003_create_genre_table;
mod m20250601_000004_create_team_table;
mod m20250601_000005_create_game_table;
mod m20250601_000006_create_game_genre_table;
mod m20250601_000007_create_game_team_table;
mod m20250601_000008_create_review_table;
mod m20250601_000009_create_user_liked_genre_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_role_table::Migration),
            Box::new(m20250601_000002_create_user_table::Migration),
            Box::new(m20250601_000003_create_genre_table::Migration),
            Box::new(m20250601_000004_create_team_table::Migration),
            Box::new(m20250601_000005_create_game_table::Migration),
            Box::new(m20250601_000006_create_game_genre_table::Migration),
            Box::new(m20250601_000007_create_game_team_table::Migration),
            Box::new(m20250601_000008_create_review_table::Migration),
            Box::new(m20250601_000009_create_user_liked_genre_table::Migration),
        ]
    }
}
