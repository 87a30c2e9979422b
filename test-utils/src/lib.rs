//! Game Catalog Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the game
//! catalog backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert helpers producing rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_user_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::role::create_default_roles(db).await?;
//!     let user = factory::user::create_user(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
