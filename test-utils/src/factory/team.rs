//! Team factory and link helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a team named `"Team {id}"`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    create_team_named(db, format!("Team {}", next_id())).await
}

/// Creates a team with the given name.
pub async fn create_team_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::team::Model, DbErr> {
    entity::team::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a team to a game.
pub async fn link_game(
    db: &DatabaseConnection,
    game_id: i32,
    team_id: i32,
) -> Result<entity::game_team::Model, DbErr> {
    entity::game_team::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        team_id: ActiveValue::Set(team_id),
    }
    .insert(db)
    .await
}
