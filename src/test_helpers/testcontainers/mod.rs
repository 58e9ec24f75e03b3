//! # testcontainers Integration Testing Infrastructure
//!
//! Builders for the external services the integration tests run against.
//! Container lifecycle and readiness waiting belong to `testcontainers-rs`;
//! each container is stopped and removed when its handle is dropped.
//!
//! ```text
//! Individual Container Services
//! ├── TodoPostgres        # PostgreSQL, generic image or packaged module
//! ├── LocalStackService   # S3 (module) and SQS (generic image)
//! └── MongoReplicaSet     # MongoDB single-node replica set
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_store::test_helpers::testcontainers::TodoPostgres;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let postgres = TodoPostgres::new().with_db_name("todos");
//! let container = postgres.start_async().await?;
//! let db_url = postgres.connection_string_async(&container).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Tests that need Docker are marked `#[ignore]`:
//!
//! ```bash
//! cargo test -- --ignored
//! ```

pub mod localstack_container;
pub mod mongo_container;
pub mod postgres_container;

pub use localstack_container::LocalStackService;
pub use mongo_container::MongoReplicaSet;
pub use postgres_container::TodoPostgres;

/// Default timeout for container startup
pub const DEFAULT_CONTAINER_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(120);
