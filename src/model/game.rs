use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameDto {
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
    /// Team names, sorted.
    pub game_teams: Vec<String>,
    /// Genre names, sorted.
    pub game_genres: Vec<String>,
    /// Review bodies in creation order.
    pub game_reviews: Vec<String>,
}
