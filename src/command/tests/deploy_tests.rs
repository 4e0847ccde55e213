//! Unit tests for the deploy service.

use rstest::rstest;
use std::sync::Arc;

use super::doubles::{EchoHandler, StubPublisher};
use crate::command::domain::{CommandMetadata, CommandModule};
use crate::command::ports::publisher::PublishError;
use crate::command::services::{CommandRegistry, DeployService};

fn registry() -> Arc<CommandRegistry> {
    Arc::new(CommandRegistry::load([
        CommandModule::new("uptime.rs")
            .with_metadata(CommandMetadata::new("uptime", "uptime report"))
            .with_handler(Arc::new(EchoHandler)),
        CommandModule::new("ping.rs")
            .with_metadata(CommandMetadata::new("ping", "latency check"))
            .with_handler(Arc::new(EchoHandler)),
    ]))
}

#[rstest]
#[tokio::test]
async fn publish_sends_all_metadata_in_name_order() {
    let publisher = StubPublisher::new();
    let received = Arc::clone(&publisher.received);
    let service = DeployService::new(registry(), publisher);

    let published = service.publish().await.expect("publish should succeed");

    assert_eq!(published, 2);
    let names: Vec<_> = received
        .lock()
        .expect("publisher mutex poisoned")
        .iter()
        .map(|metadata| metadata.name.clone())
        .collect();
    assert_eq!(names, ["ping", "uptime"]);
}

#[rstest]
#[tokio::test]
async fn publish_propagates_publisher_failure() {
    let service = DeployService::new(registry(), StubPublisher::failing());

    let error = service.publish().await.expect_err("publish should fail");

    assert!(matches!(error, PublishError::Platform(_)));
}
