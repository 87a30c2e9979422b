//! User service for business logic.
//!
//! This module provides the `UserService` for user lookups and user management. Every
//! write runs in one transaction that commits on success; any early return drops the
//! transaction, which rolls it back.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{genre::GenreRepository, role::RoleRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User, UserProfile, DEFAULT_USER_ROLE_ID},
    service::credential::CredentialService,
};

/// Message returned when a username is already taken.
pub const USERNAME_TAKEN_MESSAGE: &str = "User with this username already exists";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    credentials: &'a CredentialService,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `credentials` - Password hashing service
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, credentials: &'a CredentialService) -> Self {
        Self { db, credentials }
    }

    /// Retrieves a user with role and liked genres loaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserProfile>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Retrieves a stored user record by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_username(username).await?)
    }

    /// Checks whether a username is taken.
    pub async fn exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db).exists(username).await?)
    }

    /// Gets the ids of the genres a user likes.
    pub async fn liked_genre_ids(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(UserRepository::new(self.db).liked_genre_ids(user_id).await?)
    }

    /// Creates a user with the default role and a hashed password.
    ///
    /// The caller checks `exists` first for a friendly error; the unique constraint on
    /// username still decides races and surfaces as a conflict.
    ///
    /// # Arguments
    /// - `param` - Validated username and plain-text password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Username already taken
    /// - `Err(AppError)` - Hashing or database error; nothing is written
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let password_hash = self.credentials.hash(&param.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(param.username, password_hash, DEFAULT_USER_ROLE_ID)
            .await
            .map_err(username_conflict)?;

        txn.commit().await?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Applies a partial update and returns the user reloaded with associations.
    ///
    /// Only fields present in `param` change. A password is re-hashed. A role id must
    /// refer to an existing role. A liked-genre list replaces the whole set and every
    /// id in it must exist. All checks run before any write, and all writes share one
    /// transaction, so a failed update leaves the user untouched.
    ///
    /// # Arguments
    /// - `user_id` - User to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - Unknown role id or genre id
    /// - `Err(AppError::Conflict)` - New username already taken
    /// - `Err(AppError)` - Hashing or database error
    pub async fn update(
        &self,
        user_id: i32,
        param: UpdateUserParam,
    ) -> Result<UserProfile, AppError> {
        let password_hash = match &param.password {
            Some(password) => Some(self.credentials.hash(password)?),
            None => None,
        };

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(role_id) = param.role_id {
            if !RoleRepository::new(&txn).exists(role_id).await? {
                return Err(AppError::BadRequest("Role not found".to_string()));
            }
        }

        if let Some(genre_ids) = &param.liked_genre_ids {
            if !GenreRepository::new(&txn).all_exist(genre_ids).await? {
                return Err(AppError::BadRequest(
                    "One or more genres not found".to_string(),
                ));
            }
        }

        user_repo
            .update(user_id, param.username, password_hash, param.role_id)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => AppError::NotFound("User not found".to_string()),
                err => username_conflict(err),
            })?;

        if let Some(genre_ids) = &param.liked_genre_ids {
            user_repo.replace_liked_genres(user_id, genre_ids).await?;
        }

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        txn.commit().await?;

        Ok(user)
    }

    /// Deletes a user by id.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing is deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let deleted = UserRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted user {}", id);
        }

        Ok(deleted)
    }
}

/// Maps a unique constraint violation to a conflict; everything else stays a database error.
fn username_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(USERNAME_TAKEN_MESSAGE.to_string())
        }
        _ => err.into(),
    }
}
