//! # Test Schema Loader
//!
//! Test-support only, not a migration system: reads the single schema script
//! from `migrations/` and executes its text as one batch. There is no version
//! tracking, so running it against a database that already has the `todos`
//! table fails with the store's "relation already exists" error.
//!
//! A script may hold several statements, so it goes through the simple
//! query protocol on a single connection checked out from whatever the caller
//! passes in (a pool, a connection or a transaction).

use sqlx::{Acquire, Postgres};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::logging::log_database_operation;

pub const MIGRATIONS_DIR: &str = "migrations";
pub const TODO_MIGRATION: &str = "20240503212727_todo.sql";

/// `<current dir>/migrations/20240503212727_todo.sql`
pub fn migration_path() -> PathBuf {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    project_root.join(MIGRATIONS_DIR).join(TODO_MIGRATION)
}

/// Read a migration file as text
pub fn load_migration(path: &Path) -> Result<String, sqlx::Error> {
    std::fs::read_to_string(path).map_err(sqlx::Error::Io)
}

/// Execute the text of `path` verbatim
pub async fn run_migration_file<'a, A>(connection: A, path: &Path) -> Result<(), sqlx::Error>
where
    A: Acquire<'a, Database = Postgres>,
{
    info!(path = %path.display(), "Running migration");

    let sql = load_migration(path)?;
    debug!(sql = %sql, "Migration contents");

    let mut conn = connection.acquire().await?;
    let path = path.display().to_string();
    match sqlx::raw_sql(&sql).execute(&mut *conn).await {
        Ok(_) => {
            log_database_operation("migrate", Some("todos"), None, "applied", Some(&path));
            Ok(())
        }
        Err(error) => {
            log_database_operation("migrate", Some("todos"), None, "failed", Some(&error.to_string()));
            Err(error)
        }
    }
}

/// Establish the `todos` schema from the default migration path
pub async fn run_migrations<'a, A>(connection: A) -> Result<(), sqlx::Error>
where
    A: Acquire<'a, Database = Postgres>,
{
    run_migration_file(connection, &migration_path()).await
}
