//! One-shot publication of command metadata to the platform registry.

use std::sync::Arc;
use tracing::info;

use crate::command::ports::publisher::{CommandPublisher, PublishResult};
use crate::command::services::registry::CommandRegistry;

/// Publishes the loaded command set through the bulk-replace endpoint.
#[derive(Debug, Clone)]
pub struct DeployService<P> {
    registry: Arc<CommandRegistry>,
    publisher: P,
}

impl<P> DeployService<P>
where
    P: CommandPublisher,
{
    /// Creates a deploy service over the loaded registry.
    #[must_use]
    pub const fn new(registry: Arc<CommandRegistry>, publisher: P) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    /// Serializes all command metadata and replaces the platform's set.
    ///
    /// Returns the number of commands the platform reports as registered.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::ports::publisher::PublishError`] when the
    /// administrative call fails; the failure is terminal for the run.
    pub async fn publish(&self) -> PublishResult<usize> {
        let metadata = self.registry.metadata();
        info!(count = metadata.len(), "refreshing application commands");
        let published = self.publisher.replace_all(&metadata).await?;
        info!(count = published, "reloaded application commands");
        Ok(published)
    }
}
