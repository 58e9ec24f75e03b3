//! Queue round trip through LocalStack SQS (generic image).

use anyhow::Context;
use todo_store::test_helpers::setup_test_environment;
use todo_store::test_helpers::testcontainers::LocalStackService;

const QUEUE: &str = "testing";

#[tokio::test]
#[ignore] // Only run when Docker is available
async fn test_localstack_sqs_send_and_receive() -> anyhow::Result<()> {
    setup_test_environment();

    let localstack = LocalStackService::new();
    let container = localstack.start_generic_async().await?;
    let endpoint = localstack.endpoint_url_async(&container).await?;
    let config = LocalStackService::sdk_config(&endpoint).await;
    let client = LocalStackService::sqs_client(&config);

    let created = client.create_queue().queue_name(QUEUE).send().await?;
    assert!(created.queue_url().is_some());

    let queues = client.list_queues().send().await?;
    assert_eq!(queues.queue_urls().len(), 1);
    let queue_url = queues.queue_urls()[0].clone();

    let sent = client
        .send_message()
        .queue_url(&queue_url)
        .message_body("testing")
        .send()
        .await?;
    assert!(sent.message_id().is_some());

    let received = client
        .receive_message()
        .queue_url(&queue_url)
        .wait_time_seconds(10)
        .send()
        .await?;
    let message = received
        .messages()
        .first()
        .context("queue returned no message")?;

    assert_eq!(message.body(), Some("testing"));

    Ok(())
}
