//! Chat-gateway port for the HTTP facade.
//!
//! Route handlers depend on this trait rather than the platform client so
//! the facade is testable without a live connection.

use async_trait::async_trait;
use thiserror::Error;

use crate::facade::domain::{BotIdentity, ChannelSummary, GuildSummary, MessageView};

/// Result type for chat-gateway operations.
pub type ChatGatewayResult<T> = Result<T, ChatGatewayError>;

/// Port over the connected client's cache and REST calls.
///
/// Cache reads (`bot_identity`, `guilds`, `guild_channels`) are synchronous;
/// message operations go to the platform and may fail.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Returns the bot identity once the gateway connection is ready.
    fn bot_identity(&self) -> Option<BotIdentity>;

    /// Lists the guilds in the connected client's cache.
    fn guilds(&self) -> Vec<GuildSummary>;

    /// Lists a guild's text-based channels sorted by position.
    ///
    /// Returns `None` when the guild is not in the cache.
    fn guild_channels(&self, guild_id: &str) -> Option<Vec<ChannelSummary>>;

    /// Fetches up to `limit` most recent messages in chronological order.
    ///
    /// # Errors
    ///
    /// Returns [`ChatGatewayError::ChannelNotFound`] for unknown channels and
    /// [`ChatGatewayError::Platform`] when the underlying call fails.
    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> ChatGatewayResult<Vec<MessageView>>;

    /// Sends a message to a channel and returns the created message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatGatewayError::ChannelNotFound`] for unknown channels and
    /// [`ChatGatewayError::Platform`] when the underlying call fails.
    async fn send_message(&self, channel_id: &str, content: &str)
    -> ChatGatewayResult<MessageView>;
}

/// Errors for chat-gateway operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatGatewayError {
    /// The referenced channel is not known to the connected client.
    #[error("Channel not found")]
    ChannelNotFound,

    /// The underlying platform call failed.
    #[error("{0}")]
    Platform(String),
}
