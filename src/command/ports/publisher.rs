//! Command-publication port used by the deploy tool.

use async_trait::async_trait;
use thiserror::Error;

use crate::command::domain::CommandMetadata;

/// Result type for command-publication operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Port for the platform's administrative bulk-replace endpoint.
///
/// One call atomically overwrites the full set of registered command
/// schemas for the deployment's application identity.
#[async_trait]
pub trait CommandPublisher: Send + Sync {
    /// Replaces all registered command schemas with the given set.
    ///
    /// Returns the number of commands the platform reports as registered.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the administrative call fails. Failures
    /// are terminal for a deploy run; there is no retry.
    async fn replace_all(&self, commands: &[CommandMetadata]) -> PublishResult<usize>;
}

/// Errors for command-publication operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    /// The administrative API call failed.
    #[error("command publication failed: {0}")]
    Platform(String),
}
