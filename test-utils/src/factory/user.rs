//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults. The referenced role must exist, so call
//! `factory::role::create_default_roles` first.

use crate::factory::{helpers::next_id, role::EDITOR_ROLE_ID};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("admin1")
///     .role_id(ADMIN_ROLE_ID)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    role_id: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - password_hash: `"hashed"` (not a valid hash; logins with it always fail)
    /// - role_id: editor
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            password_hash: "hashed".to_string(),
            role_id: EDITOR_ROLE_ID,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash verbatim.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role id.
    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = role_id;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            role_id: ActiveValue::Set(self.role_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an editor with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given role.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_id: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role_id(role_id).build().await
}
