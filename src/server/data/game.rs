//! Game data repository.
//!
//! Games are queried a page at a time, then their genres, teams and reviews are loaded
//! with one query per association keyed by the page's game ids.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::game::{GameWithRelations, PageParam};

/// Repository providing read access to the game catalog.
pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a page of games in id order with associations loaded.
    ///
    /// # Arguments
    /// - `page` - Limit and offset of the window
    ///
    /// # Returns
    /// - `Ok(Vec<GameWithRelations>)` - At most `page.limit` games
    /// - `Err(DbErr)` - Database error during any query
    pub async fn get_paginated(&self, page: PageParam) -> Result<Vec<GameWithRelations>, DbErr> {
        let games = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        self.load_relations(games).await
    }

    /// Gets a page of games linked to at least one of `genre_ids`.
    ///
    /// Each game appears once regardless of how many of the genres it carries. Games
    /// are ordered by rating, highest first, with ties broken by ascending id.
    ///
    /// # Arguments
    /// - `genre_ids` - Genres to match; an empty slice matches nothing
    /// - `page` - Limit and offset of the window
    ///
    /// # Returns
    /// - `Ok(Vec<GameWithRelations>)` - Matching games
    /// - `Err(DbErr)` - Database error during any query
    pub async fn get_by_genre_ids(
        &self,
        genre_ids: &[i32],
        page: PageParam,
    ) -> Result<Vec<GameWithRelations>, DbErr> {
        if genre_ids.is_empty() {
            return Ok(Vec::new());
        }

        let games = entity::prelude::Game::find()
            .inner_join(entity::prelude::GameGenre)
            .filter(entity::game_genre::Column::GenreId.is_in(genre_ids.to_vec()))
            .distinct()
            .order_by_desc(entity::game::Column::Rating)
            .order_by_asc(entity::game::Column::Id)
            .limit(page.limit)
            .offset(page.offset)
            .all(self.db)
            .await?;

        self.load_relations(games).await
    }

    async fn load_relations(
        &self,
        games: Vec<entity::game::Model>,
    ) -> Result<Vec<GameWithRelations>, DbErr> {
        if games.is_empty() {
            return Ok(Vec::new());
        }

        let game_ids: Vec<i32> = games.iter().map(|g| g.id).collect();

        let mut genres_map: HashMap<i32, Vec<String>> = HashMap::new();
        for (link, genre) in entity::prelude::GameGenre::find()
            .filter(entity::game_genre::Column::GameId.is_in(game_ids.clone()))
            .find_also_related(entity::prelude::Genre)
            .all(self.db)
            .await?
        {
            if let Some(genre) = genre {
                genres_map.entry(link.game_id).or_default().push(genre.name);
            }
        }

        let mut teams_map: HashMap<i32, Vec<String>> = HashMap::new();
        for (link, team) in entity::prelude::GameTeam::find()
            .filter(entity::game_team::Column::GameId.is_in(game_ids.clone()))
            .find_also_related(entity::prelude::Team)
            .all(self.db)
            .await?
        {
            if let Some(team) = team {
                teams_map.entry(link.game_id).or_default().push(team.name);
            }
        }

        let mut reviews_map: HashMap<i32, Vec<String>> = HashMap::new();
        for review in entity::prelude::Review::find()
            .filter(entity::review::Column::GameId.is_in(game_ids))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await?
        {
            reviews_map.entry(review.game_id).or_default().push(review.body);
        }

        Ok(games
            .into_iter()
            .map(|game| {
                let mut genres = genres_map.remove(&game.id).unwrap_or_default();
                let mut teams = teams_map.remove(&game.id).unwrap_or_default();
                let reviews = reviews_map.remove(&game.id).unwrap_or_default();
                genres.sort();
                teams.sort();

                GameWithRelations::from_entity(game, genres, teams, reviews)
            })
            .collect())
    }
}
