//! In-memory chat-gateway adapter.
//!
//! Serves facade tests and the disconnected fallback without a platform
//! client. Message identifiers and timestamps are deterministic counters
//! so assertions stay stable.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::facade::domain::{
    AuthorView, BotIdentity, ChannelSummary, GuildSummary, MessageView,
};
use crate::facade::ports::{ChatGateway, ChatGatewayError, ChatGatewayResult};

/// In-memory gateway seeded through its builder methods.
#[derive(Debug, Default)]
pub struct InMemoryChatGateway {
    identity: Option<BotIdentity>,
    guilds: Vec<GuildSummary>,
    channels: HashMap<String, Vec<ChannelSummary>>,
    known_channels: HashSet<String>,
    failing_channels: HashSet<String>,
    messages: RwLock<HashMap<String, Vec<MessageView>>>,
    next_message_id: AtomicU64,
}

impl InMemoryChatGateway {
    /// Creates an empty, disconnected gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the gateway as connected under the given identity.
    #[must_use]
    pub fn with_identity(mut self, identity: BotIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Registers a guild and its channels.
    #[must_use]
    pub fn with_guild(mut self, guild: GuildSummary, channels: Vec<ChannelSummary>) -> Self {
        for channel in &channels {
            self.known_channels.insert(channel.id.clone());
        }
        self.channels.insert(guild.id.clone(), channels);
        self.guilds.push(guild);
        self
    }

    /// Seeds a channel's message history in chronological order.
    #[must_use]
    pub fn with_messages(self, channel_id: &str, history: Vec<MessageView>) -> Self {
        {
            let mut messages = self.messages.write().unwrap_or_else(|poison| poison.into_inner());
            messages.insert(channel_id.to_owned(), history);
        }
        self
    }

    /// Makes platform calls against the given channel fail.
    #[must_use]
    pub fn with_failing_channel(mut self, channel_id: &str) -> Self {
        self.known_channels.insert(channel_id.to_owned());
        self.failing_channels.insert(channel_id.to_owned());
        self
    }

    fn check_channel(&self, channel_id: &str) -> ChatGatewayResult<()> {
        if !self.known_channels.contains(channel_id) {
            return Err(ChatGatewayError::ChannelNotFound);
        }
        if self.failing_channels.contains(channel_id) {
            return Err(ChatGatewayError::Platform("platform call refused".to_owned()));
        }
        Ok(())
    }

    fn bot_author(&self) -> AuthorView {
        let (id, username) = self
            .identity
            .as_ref()
            .map_or(("0".to_owned(), "herald".to_owned()), |identity| {
                (identity.id.clone(), identity.username.clone())
            });
        AuthorView {
            id,
            username,
            avatar: None,
            bot: true,
        }
    }
}

#[async_trait]
impl ChatGateway for InMemoryChatGateway {
    fn bot_identity(&self) -> Option<BotIdentity> {
        self.identity.clone()
    }

    fn guilds(&self) -> Vec<GuildSummary> {
        self.guilds.clone()
    }

    fn guild_channels(&self, guild_id: &str) -> Option<Vec<ChannelSummary>> {
        self.channels.get(guild_id).cloned()
    }

    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> ChatGatewayResult<Vec<MessageView>> {
        self.check_channel(channel_id)?;
        let stored = self
            .messages
            .read()
            .map_err(|_| ChatGatewayError::Platform("message store poisoned".to_owned()))?
            .get(channel_id)
            .cloned()
            .unwrap_or_default();
        let skipped = stored.len().saturating_sub(usize::from(limit));
        Ok(stored.into_iter().skip(skipped).collect())
    }

    async fn send_message(
        &self,
        channel_id: &str,
        content: &str,
    ) -> ChatGatewayResult<MessageView> {
        self.check_channel(channel_id)?;
        let id = self.next_message_id.fetch_add(1, Ordering::Relaxed) + 1;
        let message = MessageView {
            id: id.to_string(),
            content: content.to_owned(),
            author: self.bot_author(),
            timestamp: i64::try_from(id).unwrap_or_default(),
            attachments: Vec::new(),
        };
        let mut messages = self
            .messages
            .write()
            .map_err(|_| ChatGatewayError::Platform("message store poisoned".to_owned()))?;
        messages
            .entry(channel_id.to_owned())
            .or_default()
            .push(message.clone());
        Ok(message)
    }
}
