//! Role factory.
//!
//! The production schema seeds three fixed roles through a migration; tests built from
//! entities call `create_default_roles` to get the same rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub const ADMIN_ROLE_ID: i32 = 1;
pub const EDITOR_ROLE_ID: i32 = 2;
pub const USER_ROLE_ID: i32 = 3;

/// Creates a role with an explicit id and name.
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
pub async fn create_role(
    db: &DatabaseConnection,
    id: i32,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        id: ActiveValue::Set(id),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

/// Creates the `admin`, `editor` and `user` roles with ids 1, 2 and 3.
///
/// # Returns
/// - `Ok(Vec<entity::role::Model>)` - The three roles in id order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_default_roles(
    db: &DatabaseConnection,
) -> Result<Vec<entity::role::Model>, DbErr> {
    Ok(vec![
        create_role(db, ADMIN_ROLE_ID, "admin").await?,
        create_role(db, EDITOR_ROLE_ID, "editor").await?,
        create_role(db, USER_ROLE_ID, "user").await?,
    ])
}
