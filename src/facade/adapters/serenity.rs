//! Serenity-backed chat-gateway adapter.
//!
//! Pure translation between the facade's view models and the connected
//! client's cache and REST calls; no independent logic beyond field mapping.

use async_trait::async_trait;
use serenity::builder::{CreateMessage, GetMessages};
use serenity::cache::Cache;
use serenity::http::Http;
use serenity::model::channel::{ChannelType, Message};
use serenity::model::id::{ChannelId, GuildId};
use std::sync::{Arc, RwLock};

use crate::facade::domain::{
    AttachmentView, AuthorView, BotIdentity, ChannelSummary, GuildSummary, MessageView,
};
use crate::facade::ports::{ChatGateway, ChatGatewayError, ChatGatewayResult};
use crate::snowflake;

/// Shared connection state written once when the gateway becomes ready.
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    identity: Arc<RwLock<Option<BotIdentity>>>,
}

impl ConnectionState {
    /// Creates a not-yet-connected state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the bot identity delivered by the ready event.
    pub fn mark_ready(&self, identity: BotIdentity) {
        if let Ok(mut guard) = self.identity.write() {
            *guard = Some(identity);
        }
    }

    /// Returns the recorded identity, if connected.
    #[must_use]
    pub fn identity(&self) -> Option<BotIdentity> {
        self.identity.read().ok().and_then(|guard| guard.clone())
    }
}

/// Chat gateway over the serenity cache and HTTP client.
pub struct SerenityChatGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
    connection: ConnectionState,
}

impl SerenityChatGateway {
    /// Creates the gateway over a client's cache and HTTP handles.
    #[must_use]
    pub const fn new(cache: Arc<Cache>, http: Arc<Http>, connection: ConnectionState) -> Self {
        Self {
            cache,
            http,
            connection,
        }
    }

    /// Creates a gateway for a process without a configured credential.
    ///
    /// The empty cache answers every lookup with absence, matching the
    /// behaviour of a client that never logged in.
    #[must_use]
    pub fn disconnected(connection: ConnectionState) -> Self {
        Self::new(Arc::new(Cache::new()), Arc::new(Http::new("")), connection)
    }

    fn channel_in_cache(&self, channel_id: ChannelId) -> bool {
        self.cache.channel(channel_id).is_some()
    }
}

#[async_trait]
impl ChatGateway for SerenityChatGateway {
    fn bot_identity(&self) -> Option<BotIdentity> {
        self.connection.identity().map(|identity| BotIdentity {
            guilds: self.cache.guilds().len(),
            ..identity
        })
    }

    fn guilds(&self) -> Vec<GuildSummary> {
        self.cache
            .guilds()
            .into_iter()
            .filter_map(|guild_id| {
                self.cache.guild(guild_id).map(|guild| GuildSummary {
                    id: guild_id.to_string(),
                    name: guild.name.clone(),
                    icon: guild.icon.as_ref().map(ToString::to_string),
                    member_count: guild.member_count,
                })
            })
            .collect()
    }

    fn guild_channels(&self, guild_id: &str) -> Option<Vec<ChannelSummary>> {
        let guild_id: GuildId = guild_id.parse().ok()?;
        let guild = self.cache.guild(guild_id)?;
        let mut channels: Vec<ChannelSummary> = guild
            .channels
            .values()
            .filter(|channel| is_text_based(channel.kind))
            .map(|channel| ChannelSummary {
                id: channel.id.to_string(),
                name: channel.name.clone(),
                channel_type: u8::from(channel.kind),
                position: channel.position,
            })
            .collect();
        channels.sort_by_key(|channel| channel.position);
        Some(channels)
    }

    async fn recent_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> ChatGatewayResult<Vec<MessageView>> {
        let channel_id = parse_channel_id(channel_id)?;
        if !self.channel_in_cache(channel_id) {
            return Err(ChatGatewayError::ChannelNotFound);
        }
        let fetched = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await
            .map_err(platform_error)?;
        // The platform returns newest first; the facade serves chronological.
        Ok(fetched.iter().rev().map(message_view).collect())
    }

    async fn send_message(
        &self,
        channel_id: &str,
        content: &str,
    ) -> ChatGatewayResult<MessageView> {
        let channel_id = parse_channel_id(channel_id)?;
        if !self.channel_in_cache(channel_id) {
            return Err(ChatGatewayError::ChannelNotFound);
        }
        let message = channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(platform_error)?;
        Ok(message_view(&message))
    }
}

const fn is_text_based(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::NewsThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
    )
}

fn parse_channel_id(channel_id: &str) -> ChatGatewayResult<ChannelId> {
    channel_id
        .parse()
        .map_err(|_| ChatGatewayError::ChannelNotFound)
}

fn platform_error(error: serenity::Error) -> ChatGatewayError {
    ChatGatewayError::Platform(error.to_string())
}

fn message_view(message: &Message) -> MessageView {
    MessageView {
        id: message.id.to_string(),
        content: message.content.clone(),
        author: AuthorView {
            id: message.author.id.to_string(),
            username: message.author.name.clone(),
            avatar: message.author.avatar.as_ref().map(ToString::to_string),
            bot: message.author.bot,
        },
        timestamp: snowflake::timestamp_ms(message.id.get()),
        attachments: message
            .attachments
            .iter()
            .map(|attachment| AttachmentView {
                url: attachment.url.clone(),
                name: attachment.filename.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serenity::model::channel::ChannelType;

    use super::is_text_based;

    #[rstest]
    #[case::text(ChannelType::Text)]
    #[case::announcement(ChannelType::News)]
    #[case::announcement_thread(ChannelType::NewsThread)]
    #[case::public_thread(ChannelType::PublicThread)]
    #[case::private_thread(ChannelType::PrivateThread)]
    fn message_capable_channels_are_listed(#[case] kind: ChannelType) {
        assert!(is_text_based(kind));
    }

    #[rstest]
    #[case::voice(ChannelType::Voice)]
    #[case::category(ChannelType::Category)]
    #[case::forum(ChannelType::Forum)]
    fn non_text_channels_are_filtered_out(#[case] kind: ChannelType) {
        assert!(!is_text_based(kind));
    }
}
