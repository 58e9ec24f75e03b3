//! # PostgreSQL Container
//!
//! PostgreSQL for the todo scenarios, either from the plain `postgres` image
//! with an explicit readiness strategy or from the packaged
//! `testcontainers-modules` image.

use sqlx::postgres::PgConnectOptions;
use std::collections::HashMap;
use testcontainers::core::wait::LogWaitStrategy;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ContainerRequest, GenericImage, Image, ImageExt};
use testcontainers_modules::postgres::Postgres;

use super::DEFAULT_CONTAINER_TIMEOUT;
use crate::config::postgres_url;
use crate::logging::log_container_operation;

pub const POSTGRES_PORT: u16 = 5432;

/// The init scripts run against a temporary server first, so the message
/// shows up once before the real server is listening.
const READY_MESSAGE: &str = "database system is ready to accept connections";
const READY_MESSAGE_OCCURRENCES: usize = 2;

const DEFAULT_IMAGE: &str = "postgres";
const DEFAULT_TAG: &str = "13.3-alpine";
const DEFAULT_DB: &str = "todos";
const DEFAULT_USER: &str = "testing";
const DEFAULT_PASSWORD: &str = "testing";

#[derive(Debug, Clone)]
pub struct TodoPostgres {
    image_name: String,
    image_tag: String,
    env_vars: HashMap<String, String>,
}

impl Default for TodoPostgres {
    fn default() -> Self {
        let mut env_vars = HashMap::new();
        env_vars.insert("POSTGRES_DB".to_string(), DEFAULT_DB.to_string());
        env_vars.insert("POSTGRES_USER".to_string(), DEFAULT_USER.to_string());
        env_vars.insert("POSTGRES_PASSWORD".to_string(), DEFAULT_PASSWORD.to_string());

        Self {
            image_name: DEFAULT_IMAGE.to_string(),
            image_tag: DEFAULT_TAG.to_string(),
            env_vars,
        }
    }
}

impl TodoPostgres {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db_name(mut self, db_name: &str) -> Self {
        self.env_vars.insert("POSTGRES_DB".to_string(), db_name.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.env_vars.insert("POSTGRES_USER".to_string(), user.to_string());
        self
    }

    pub fn with_password(mut self, password: &str) -> Self {
        self.env_vars.insert("POSTGRES_PASSWORD".to_string(), password.to_string());
        self
    }

    /// Tag of the generic image; the packaged module picks its own
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.image_tag = tag.to_string();
        self
    }

    pub fn db_name(&self) -> &str {
        self.env_var("POSTGRES_DB", DEFAULT_DB)
    }

    pub fn user(&self) -> &str {
        self.env_var("POSTGRES_USER", DEFAULT_USER)
    }

    pub fn password(&self) -> &str {
        self.env_var("POSTGRES_PASSWORD", DEFAULT_PASSWORD)
    }

    fn env_var<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.env_vars.get(key).map(String::as_str).unwrap_or(default)
    }

    fn image_ref(&self) -> String {
        format!("{}:{}", self.image_name, self.image_tag)
    }

    /// Container request for the generic image, before it is started
    fn generic_request(&self) -> ContainerRequest<GenericImage> {
        let base_request: ContainerRequest<GenericImage> =
            GenericImage::new(self.image_name.as_str(), self.image_tag.as_str())
                .with_exposed_port(ContainerPort::Tcp(POSTGRES_PORT))
                .with_wait_for(WaitFor::Log(
                    LogWaitStrategy::stderr(READY_MESSAGE).with_times(READY_MESSAGE_OCCURRENCES),
                ))
                .with_startup_timeout(DEFAULT_CONTAINER_TIMEOUT);

        self.env_vars.iter().fold(
            base_request,
            |req: ContainerRequest<GenericImage>, (key, value)| req.with_env_var(key, value),
        )
    }

    /// Start PostgreSQL from the generic image
    pub async fn start_async(&self) -> anyhow::Result<ContainerAsync<GenericImage>> {
        let image = self.image_ref();
        log_container_operation("start", &image, None, "starting");

        let container = self.generic_request().start().await?;

        log_container_operation("start", &image, None, "ready");
        Ok(container)
    }

    /// Start PostgreSQL from the `testcontainers-modules` image, configured
    /// with the same database, user and password
    pub async fn start_module_async(&self) -> anyhow::Result<ContainerAsync<Postgres>> {
        log_container_operation("start", "postgres module", None, "starting");

        let container = Postgres::default()
            .with_db_name(self.db_name())
            .with_user(self.user())
            .with_password(self.password())
            .start()
            .await?;

        log_container_operation("start", "postgres module", None, "ready");
        Ok(container)
    }

    /// Get connection string for a running container
    pub async fn connection_string_async<I: Image>(
        &self,
        container: &ContainerAsync<I>,
    ) -> anyhow::Result<String> {
        let host = container.get_host().await?;
        let host_port = container.get_host_port_ipv4(ContainerPort::Tcp(POSTGRES_PORT)).await?;

        Ok(postgres_url(
            self.user(),
            self.password(),
            &host.to_string(),
            host_port,
            self.db_name(),
        ))
    }

    /// Connection options for a running container
    pub async fn connect_options_async<I: Image>(
        &self,
        container: &ContainerAsync<I>,
    ) -> anyhow::Result<PgConnectOptions> {
        let host = container.get_host().await?;
        let host_port = container.get_host_port_ipv4(ContainerPort::Tcp(POSTGRES_PORT)).await?;

        Ok(PgConnectOptions::new()
            .host(&host.to_string())
            .port(host_port)
            .username(self.user())
            .password(self.password())
            .database(self.db_name()))
    }
}
