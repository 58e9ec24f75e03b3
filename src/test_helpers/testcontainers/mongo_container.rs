//! # MongoDB Container
//!
//! Change streams are only available on replica sets, so the container is
//! always started as a single-node replica set.

use testcontainers::core::ContainerPort;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::mongo::Mongo;

use crate::logging::log_container_operation;

pub const MONGO_PORT: u16 = 27017;
const DEFAULT_TAG: &str = "7.0.9";

#[derive(Debug, Clone)]
pub struct MongoReplicaSet {
    image_tag: String,
}

impl Default for MongoReplicaSet {
    fn default() -> Self {
        Self {
            image_tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl MongoReplicaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.image_tag = tag.to_string();
        self
    }

    pub fn tag(&self) -> &str {
        &self.image_tag
    }

    pub async fn start_async(&self) -> anyhow::Result<ContainerAsync<Mongo>> {
        let image = format!("mongo:{}", self.image_tag);
        log_container_operation("start", &image, None, "starting");

        let container = Mongo::repl_set()
            .with_tag(self.image_tag.as_str())
            .start()
            .await?;

        log_container_operation("start", &image, None, "ready");
        Ok(container)
    }

    /// Connection string for a running container. `directConnection` keeps the
    /// driver from following the replica set's advertised (container-internal)
    /// host name.
    pub async fn connection_string_async(
        &self,
        container: &ContainerAsync<Mongo>,
    ) -> anyhow::Result<String> {
        let host = container.get_host().await?;
        let host_port = container
            .get_host_port_ipv4(ContainerPort::Tcp(MONGO_PORT))
            .await?;

        Ok(format!("mongodb://{host}:{host_port}/?directConnection=true"))
    }

    pub async fn client_async(
        &self,
        container: &ContainerAsync<Mongo>,
    ) -> anyhow::Result<mongodb::Client> {
        let uri = self.connection_string_async(container).await?;
        Ok(mongodb::Client::with_uri_str(&uri).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tag() {
        assert_eq!(MongoReplicaSet::new().tag(), "7.0.9");
        assert_eq!(MongoReplicaSet::new().with_tag("8.0").tag(), "8.0");
    }
}
