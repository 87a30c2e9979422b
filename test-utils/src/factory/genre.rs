//! Genre factory and link helpers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a genre named `"Genre {id}"`.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    create_genre_named(db, format!("Genre {}", next_id())).await
}

/// Creates a genre with the given name.
pub async fn create_genre_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::genre::Model, DbErr> {
    entity::genre::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Links a genre to a game.
pub async fn link_game(
    db: &DatabaseConnection,
    game_id: i32,
    genre_id: i32,
) -> Result<entity::game_genre::Model, DbErr> {
    entity::game_genre::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        genre_id: ActiveValue::Set(genre_id),
    }
    .insert(db)
    .await
}

/// Marks a genre as liked by a user.
pub async fn like(
    db: &DatabaseConnection,
    user_id: i32,
    genre_id: i32,
) -> Result<entity::user_liked_genre::Model, DbErr> {
    entity::user_liked_genre::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        genre_id: ActiveValue::Set(genre_id),
    }
    .insert(db)
    .await
}
