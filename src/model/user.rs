use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role_name: String,
    pub liked_genres_names: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserResponseDto {
    pub message: String,
    pub user_id: i32,
}

/// Partial update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role_id: Option<i32>,
    #[serde(default)]
    pub liked_genre_ids: Option<Vec<i32>>,
}
