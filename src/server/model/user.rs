//! User domain models and parameters.
//!
//! Provides the stored user record used for credential checks, the profile view with
//! role and liked genres resolved, and the parameter types for user creation and
//! partial updates.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::error::AppError,
};

/// Role assigned to users created through `POST /user/`.
pub const DEFAULT_USER_ROLE_ID: i32 = 3;

/// Upper bound on username and password length accepted over the API.
pub const MAX_CREDENTIAL_LENGTH: usize = 25;

/// Stored user record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// PHC-formatted argon2 hash.
    pub password_hash: String,
    pub role_id: i32,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            role_id: entity.role_id,
        }
    }
}

/// User with role name and liked genre names resolved.
///
/// Returned by id lookups and by the auth guard, so every authenticated handler
/// knows the caller's role without another query.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: i32,
    pub username: String,
    pub role_id: i32,
    pub role_name: String,
    /// Liked genre names sorted alphabetically.
    pub liked_genre_names: Vec<String>,
}

impl UserProfile {
    /// Converts the profile to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role_name: self.role_name,
            liked_genres_names: self.liked_genre_names,
        }
    }
}

/// Parameters for creating a user with the default role.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    /// Plain-text password, hashed by the service.
    pub password: String,
}

impl CreateUserParam {
    /// Validates the DTO and converts it to creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Username and password within bounds
    /// - `Err(AppError::BadRequest)` - Empty or over-long username or password
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        validate_credential_field("username", &dto.username)?;
        validate_credential_field("password", &dto.password)?;

        Ok(Self {
            username: dto.username,
            password: dto.password,
        })
    }
}

/// Parameters for a partial user update.
///
/// `None` leaves the field untouched. `liked_genre_ids` replaces the whole set when
/// present, so `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    /// Plain-text password, hashed by the service.
    pub password: Option<String>,
    pub role_id: Option<i32>,
    /// Deduplicated genre ids in first-seen order.
    pub liked_genre_ids: Option<Vec<i32>>,
}

impl UpdateUserParam {
    /// Validates the DTO and converts it to update parameters.
    ///
    /// # Returns
    /// - `Ok(UpdateUserParam)` - Present fields are valid
    /// - `Err(AppError::BadRequest)` - A present username or password is empty or too long
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if let Some(username) = &dto.username {
            validate_credential_field("username", username)?;
        }
        if let Some(password) = &dto.password {
            validate_credential_field("password", password)?;
        }

        let liked_genre_ids = dto.liked_genre_ids.map(|ids| {
            let mut seen = std::collections::HashSet::new();
            ids.into_iter().filter(|id| seen.insert(*id)).collect()
        });

        Ok(Self {
            username: dto.username,
            password: dto.password,
            role_id: dto.role_id,
            liked_genre_ids,
        })
    }
}

fn validate_credential_field(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    if value.chars().count() > MAX_CREDENTIAL_LENGTH {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, MAX_CREDENTIAL_LENGTH
        )));
    }

    Ok(())
}
