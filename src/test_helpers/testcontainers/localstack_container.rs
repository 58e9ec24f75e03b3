//! # LocalStack Container
//!
//! S3 and SQS emulation. S3 works with the packaged module; SQS needs the JSON
//! protocol from LocalStack 3.x, so it runs from the `latest` generic image.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::config::Credentials;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, Image, ImageExt};
use testcontainers_modules::localstack::LocalStack;

use super::DEFAULT_CONTAINER_TIMEOUT;
use crate::logging::log_container_operation;

pub const EDGE_PORT: u16 = 4566;
pub const REGION: &str = "us-east-1";

/// LocalStack accepts any credentials
const ACCESS_KEY_ID: &str = "test";
const SECRET_ACCESS_KEY: &str = "test";

#[derive(Debug, Clone)]
pub struct LocalStackService {
    image_name: String,
    image_tag: String,
}

impl Default for LocalStackService {
    fn default() -> Self {
        Self {
            image_name: "localstack/localstack".to_string(),
            image_tag: "latest".to_string(),
        }
    }
}

impl LocalStackService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag of the generic image used by [`Self::start_generic_async`]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.image_tag = tag.to_string();
        self
    }

    /// Start the `testcontainers-modules` LocalStack image
    pub async fn start_s3_async(&self) -> anyhow::Result<ContainerAsync<LocalStack>> {
        log_container_operation("start", "localstack module", None, "starting");

        let container = LocalStack::default()
            .with_env_var("SERVICES", "s3")
            .start()
            .await?;

        log_container_operation("start", "localstack module", None, "ready");
        Ok(container)
    }

    /// Start LocalStack from the generic image
    pub async fn start_generic_async(&self) -> anyhow::Result<ContainerAsync<GenericImage>> {
        let image = format!("{}:{}", self.image_name, self.image_tag);
        log_container_operation("start", &image, None, "starting");

        let container = GenericImage::new(self.image_name.as_str(), self.image_tag.as_str())
            .with_exposed_port(ContainerPort::Tcp(EDGE_PORT))
            .with_wait_for(WaitFor::message_on_stdout("Ready."))
            .with_startup_timeout(DEFAULT_CONTAINER_TIMEOUT)
            .start()
            .await?;

        log_container_operation("start", &image, None, "ready");
        Ok(container)
    }

    /// `http://host:port` of the edge service of a running container
    pub async fn endpoint_url_async<I: Image>(
        &self,
        container: &ContainerAsync<I>,
    ) -> anyhow::Result<String> {
        let host = container.get_host().await?;
        let host_port = container
            .get_host_port_ipv4(ContainerPort::Tcp(EDGE_PORT))
            .await?;

        Ok(format!("http://{host}:{host_port}"))
    }

    /// Shared SDK configuration pointing at a LocalStack endpoint
    pub async fn sdk_config(endpoint_url: &str) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(REGION))
            .credentials_provider(Credentials::new(
                ACCESS_KEY_ID,
                SECRET_ACCESS_KEY,
                None,
                None,
                "localstack",
            ))
            .endpoint_url(endpoint_url)
            .load()
            .await
    }

    /// S3 client with path-style addressing, as LocalStack has no bucket DNS
    pub fn s3_client(config: &SdkConfig) -> aws_sdk_s3::Client {
        let s3_config = aws_sdk_s3::config::Builder::from(config)
            .force_path_style(true)
            .build();

        aws_sdk_s3::Client::from_conf(s3_config)
    }

    pub fn sqs_client(config: &SdkConfig) -> aws_sdk_sqs::Client {
        aws_sdk_sqs::Client::new(config)
    }
}
