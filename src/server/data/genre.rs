use std::collections::HashSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

/// Repository providing genre lookups.
pub struct GenreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GenreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks that every id refers to an existing genre.
    ///
    /// Duplicate ids are allowed. An empty slice is vacuously true and runs no query.
    ///
    /// # Returns
    /// - `Ok(true)` - All ids exist
    /// - `Ok(false)` - At least one id is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn all_exist(&self, ids: &[i32]) -> Result<bool, DbErr> {
        if ids.is_empty() {
            return Ok(true);
        }

        let found: HashSet<i32> = entity::prelude::Genre::find()
            .select_only()
            .column(entity::genre::Column::Id)
            .filter(entity::genre::Column::Id.is_in(ids.to_vec()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(ids.iter().all(|id| found.contains(id)))
    }
}
