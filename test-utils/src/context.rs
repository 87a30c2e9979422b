use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Owns the in-memory SQLite database of one test.
///
/// The pool is capped at a single connection: every `sqlite::memory:` connection is a
/// separate database, so a second one would not see the tables. Code under test that
/// opens a transaction must route all of its queries through that transaction.
pub struct TestContext {
    /// Connected on first use; `None` until then.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening it on first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => {
                let mut options = ConnectOptions::new("sqlite::memory:");
                options.max_connections(1).sqlx_logging(false);

                Database::connect(options).await?
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the CREATE TABLE statements in order. `TestBuilder::build()` calls this.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
