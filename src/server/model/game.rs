//! Game domain models and pagination parameters.

use chrono::NaiveDate;

use crate::{model::game::GameDto, server::error::AppError};

/// Largest page size accepted on game listings.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Largest offset accepted on game listings.
pub const MAX_PAGE_OFFSET: u64 = i64::MAX as u64;

/// Game with its associations loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct GameWithRelations {
    pub id: i32,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    pub summary: Option<String>,
    pub times_listed: i32,
    pub reviews_number: i32,
    pub plays: i32,
    pub playing: i32,
    pub backlogs: i32,
    pub whitelist: i32,
    /// Genre names sorted alphabetically.
    pub genres: Vec<String>,
    /// Team names sorted alphabetically.
    pub teams: Vec<String>,
    /// Review bodies ordered by review id.
    pub reviews: Vec<String>,
}

impl GameWithRelations {
    /// Builds the domain model from a game entity and its resolved association names.
    pub fn from_entity(
        entity: entity::game::Model,
        genres: Vec<String>,
        teams: Vec<String>,
        reviews: Vec<String>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            release_date: entity.release_date,
            rating: entity.rating,
            summary: entity.summary,
            times_listed: entity.times_listed,
            reviews_number: entity.reviews_number,
            plays: entity.plays,
            playing: entity.playing,
            backlogs: entity.backlogs,
            whitelist: entity.whitelist,
            genres,
            teams,
            reviews,
        }
    }

    /// Converts the game to a DTO for API responses.
    pub fn into_dto(self) -> GameDto {
        GameDto {
            title: self.title,
            release_date: self.release_date,
            rating: self.rating,
            summary: self.summary,
            times_listed: self.times_listed,
            reviews_number: self.reviews_number,
            plays: self.plays,
            playing: self.playing,
            backlogs: self.backlogs,
            whitelist: self.whitelist,
            game_teams: self.teams,
            game_genres: self.genres,
            game_reviews: self.reviews,
        }
    }
}

/// Validated limit/offset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub limit: u64,
    pub offset: u64,
}

impl PageParam {
    /// Resolves optional query values against a default limit.
    ///
    /// # Arguments
    /// - `limit` - Requested page size, `None` for `default_limit`
    /// - `offset` - Number of rows to skip, `None` for zero
    /// - `default_limit` - Page size used when none is requested
    ///
    /// # Returns
    /// - `Ok(PageParam)` - Limit within `1..=100`
    /// - `Err(AppError::BadRequest)` - Limit out of range, or offset above `i64::MAX`
    pub fn resolve(
        limit: Option<u64>,
        offset: Option<u64>,
        default_limit: u64,
    ) -> Result<Self, AppError> {
        let limit = limit.unwrap_or(default_limit);

        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        let offset = offset.unwrap_or(0);

        // SQLite binds LIMIT/OFFSET as signed 64-bit integers
        if offset > MAX_PAGE_OFFSET {
            return Err(AppError::BadRequest(format!(
                "offset must be between 0 and {}",
                MAX_PAGE_OFFSET
            )));
        }

        Ok(Self { limit, offset })
    }
}
