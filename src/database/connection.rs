use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::env;

use crate::config::DatabaseConfig;

/// Caller-side connection lifecycle. The data-access functions never own one
/// of these; they borrow the pool (or a connection checked out from it).
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connect using `DATABASE_URL` when it is set, otherwise the layered
    /// [`DatabaseConfig`].
    pub async fn from_env() -> anyhow::Result<Self> {
        if let Ok(database_url) = env::var("DATABASE_URL") {
            return Ok(Self::connect(&database_url).await?);
        }

        let config = DatabaseConfig::load()?;
        Ok(Self::with_config(&config).await?)
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;

        Ok(Self { pool })
    }

    pub async fn with_config(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 as health")
            .fetch_one(&self.pool)
            .await?;

        let health: i32 = row.get("health");
        Ok(health == 1)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
