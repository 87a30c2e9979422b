//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .title("RPG Game")
///     .rating(4.0)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    release_date: Option<NaiveDate>,
    rating: f64,
    summary: Option<String>,
    plays: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Game {id}"` where id is auto-incremented
    /// - release_date: 2020-01-01
    /// - rating: `0.0`, every counter `0`, no summary
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Game {}", next_id()),
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1),
            rating: 0.0,
            summary: None,
            plays: 0,
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the release date; `None` stores NULL.
    pub fn release_date(mut self, release_date: Option<NaiveDate>) -> Self {
        self.release_date = release_date;
        self
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the plays counter.
    pub fn plays(mut self, plays: i32) -> Self {
        self.plays = plays;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            title: ActiveValue::Set(self.title),
            release_date: ActiveValue::Set(self.release_date),
            rating: ActiveValue::Set(self.rating),
            summary: ActiveValue::Set(self.summary),
            times_listed: ActiveValue::Set(0),
            reviews_number: ActiveValue::Set(0),
            plays: ActiveValue::Set(self.plays),
            playing: ActiveValue::Set(0),
            backlogs: ActiveValue::Set(0),
            whitelist: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with the given rating.
pub async fn create_game_with_rating(
    db: &DatabaseConnection,
    rating: f64,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).rating(rating).build().await
}
