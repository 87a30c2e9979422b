//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their
//! liked-genre links. The repository is generic over the connection so services can run
//! it against the pool or inside a transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{User, UserProfile};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by id with role name and liked genre names loaded.
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error, or the user's role row is missing
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserProfile>, DbErr> {
        let Some((user, role)) = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Role)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let role = role.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Role {} of user {} not found", user.role_id, user.id))
        })?;

        let liked_genre_names = entity::prelude::Genre::find()
            .inner_join(entity::prelude::UserLikedGenre)
            .filter(entity::user_liked_genre::Column::UserId.eq(user.id))
            .order_by_asc(entity::genre::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(|genre| genre.name)
            .collect();

        Ok(Some(UserProfile {
            id: user.id,
            username: user.username,
            role_id: user.role_id,
            role_name: role.name,
            liked_genre_names,
        }))
    }

    /// Finds a user by exact username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found, including the stored password hash
    /// - `Ok(None)` - No user with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether a username is taken.
    pub async fn exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `username` - Unique username
    /// - `password_hash` - Already hashed password
    /// - `role_id` - Existing role id
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique and foreign key violations
    pub async fn create(
        &self,
        username: String,
        password_hash: String,
        role_id: i32,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password_hash: ActiveValue::Set(password_hash),
            role_id: ActiveValue::Set(role_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Updates the scalar columns that are `Some`.
    ///
    /// Runs no statement when every argument is `None`.
    ///
    /// # Returns
    /// - `Ok(())` - Update applied, or nothing to apply
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that id
    /// - `Err(DbErr)` - Other database error, including unique violations on username
    pub async fn update(
        &self,
        id: i32,
        username: Option<String>,
        password_hash: Option<String>,
        role_id: Option<i32>,
    ) -> Result<(), DbErr> {
        if username.is_none() && password_hash.is_none() && role_id.is_none() {
            return Ok(());
        }

        let mut active_model = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };
        if let Some(username) = username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role_id) = role_id {
            active_model.role_id = ActiveValue::Set(role_id);
        }

        active_model.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user by id. Liked-genre links are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the ids of the genres a user likes, ascending.
    pub async fn liked_genre_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserLikedGenre::find()
            .select_only()
            .column(entity::user_liked_genre::Column::GenreId)
            .filter(entity::user_liked_genre::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_liked_genre::Column::GenreId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces a user's liked genres with `genre_ids`.
    ///
    /// Deletes every existing link, then inserts one link per id. Ids must be
    /// distinct and must exist; call inside a transaction so a failed insert leaves
    /// the previous set intact.
    pub async fn replace_liked_genres(&self, user_id: i32, genre_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::UserLikedGenre::delete_many()
            .filter(entity::user_liked_genre::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if genre_ids.is_empty() {
            return Ok(());
        }

        let links = genre_ids
            .iter()
            .map(|genre_id| entity::user_liked_genre::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                genre_id: ActiveValue::Set(*genre_id),
            });

        entity::prelude::UserLikedGenre::insert_many(links)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
