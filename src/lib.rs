#![allow(clippy::doc_markdown)] // Allow technical terms like PostgreSQL, SQLx in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections

//! # Todo Store
//!
//! Todo data access over PostgreSQL, and the container-backed test harness
//! that exercises it.
//!
//! ## Overview
//!
//! The data-access surface is deliberately small: [`Todo::create`] inserts a
//! row and returns the generated id, [`Todo::fetch`] reads one back. Both take
//! the database client as an argument (any sqlx Postgres executor), so the
//! caller decides how connections are opened, pooled and closed.
//!
//! Everything else in the crate supports testing against real services started
//! in throwaway containers: PostgreSQL, LocalStack (S3 and SQS) and a MongoDB
//! replica set.
//!
//! ## Module Organization
//!
//! - [`models`] - The `Todo` entity and its two queries
//! - [`error`] - Flat error type for the data-access layer
//! - [`config`] - Database connection settings
//! - [`database`] - Caller-side connection lifecycle
//! - [`logging`] - Structured logging setup
//! - `test_helpers` - Container builders, schema loader and test environment
//!   helpers (feature `test-helpers`, on by default)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todo_store::Todo;
//! use sqlx::PgPool;
//!
//! # async fn example(pool: &PgPool) -> todo_store::Result<()> {
//! let id = Todo::create(pool, "Search a job").await?;
//! let todo = Todo::fetch(pool, id).await?;
//! assert!(!todo.done);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                 # Unit tests
//! cargo test -- --ignored    # Container scenarios (needs Docker)
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use config::DatabaseConfig;
pub use database::DatabaseConnection;
pub use error::{Result, TodoError};
pub use models::Todo;
