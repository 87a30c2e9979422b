use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

/// Repository providing role lookups.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether a role with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Role::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
