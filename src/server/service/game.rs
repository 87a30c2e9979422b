use sea_orm::DatabaseConnection;

use crate::server::{
    data::{game::GameRepository, user::UserRepository},
    error::AppError,
    model::game::{GameWithRelations, PageParam},
};

/// Service providing game listing and recommendations.
pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists games in storage order.
    pub async fn list(&self, page: PageParam) -> Result<Vec<GameWithRelations>, AppError> {
        let games = GameRepository::new(self.db).get_paginated(page).await?;

        Ok(games)
    }

    /// Recommends games sharing at least one genre with the user's liked genres.
    ///
    /// A user without liked genres gets an empty list and no game query is made.
    ///
    /// # Arguments
    /// - `user_id` - User to recommend for
    /// - `page` - Limit and offset of the window
    ///
    /// # Returns
    /// - `Ok(Vec<GameWithRelations>)` - Matching games, highest rating first
    /// - `Err(AppError::DbErr)` - Database error during any query
    pub async fn recommend(
        &self,
        user_id: i32,
        page: PageParam,
    ) -> Result<Vec<GameWithRelations>, AppError> {
        let genre_ids = UserRepository::new(self.db).liked_genre_ids(user_id).await?;

        if genre_ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = GameRepository::new(self.db)
            .get_by_genre_ids(&genre_ids, page)
            .await?;

        Ok(games)
    }
}
