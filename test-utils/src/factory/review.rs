//! Review factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a review with a generated body for the given game.
pub async fn create_review(
    db: &DatabaseConnection,
    game_id: i32,
) -> Result<entity::review::Model, DbErr> {
    create_review_with_body(db, game_id, format!("Review {}", next_id())).await
}

/// Creates a review with the given body for the given game.
pub async fn create_review_with_body(
    db: &DatabaseConnection,
    game_id: i32,
    body: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    entity::review::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        body: ActiveValue::Set(body.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
