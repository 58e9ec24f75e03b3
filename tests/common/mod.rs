#![allow(dead_code)]

use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, GenericImage, Image};
use testcontainers_modules::postgres::Postgres;
use todo_store::test_helpers::testcontainers::TodoPostgres;
use todo_store::test_helpers::{run_migrations, setup_test_environment};

/// A migrated todo database. Dropping it stops the container.
pub struct TodoDatabase<I: Image> {
    pub pool: PgPool,
    pub postgres: TodoPostgres,
    pub container: ContainerAsync<I>,
}

impl<I: Image> TodoDatabase<I> {
    /// A dedicated connection, outside the pool
    pub async fn connect(&self) -> anyhow::Result<PgConnection> {
        let options = self.postgres.connect_options_async(&self.container).await?;
        Ok(PgConnection::connect_with(&options).await?)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

pub fn todo_postgres() -> TodoPostgres {
    TodoPostgres::new()
        .with_db_name("todos")
        .with_user("testing")
        .with_password("testing")
}

/// Generic `postgres` image with the todo schema applied
pub async fn generic_todo_database() -> anyhow::Result<TodoDatabase<GenericImage>> {
    setup_test_environment();

    let postgres = todo_postgres();
    let container = postgres.start_async().await?;
    migrated(postgres, container).await
}

/// `testcontainers-modules` postgres with the todo schema applied
pub async fn module_todo_database() -> anyhow::Result<TodoDatabase<Postgres>> {
    setup_test_environment();

    let postgres = todo_postgres();
    let container = postgres.start_module_async().await?;
    migrated(postgres, container).await
}

async fn migrated<I: Image>(
    postgres: TodoPostgres,
    container: ContainerAsync<I>,
) -> anyhow::Result<TodoDatabase<I>> {
    let database_url = postgres.connection_string_async(&container).await?;
    let pool = PgPool::connect(&database_url).await?;

    run_migrations(&pool).await?;

    Ok(TodoDatabase {
        pool,
        postgres,
        container,
    })
}

/// Generate a unique name for per-test resources
pub fn unique_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &id[..8])
}
