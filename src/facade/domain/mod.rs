//! JSON view models served by the HTTP facade.
//!
//! Field names follow the wire shapes of the dashboard client, hence the
//! camelCase renames. Identifiers stay as strings so the facade never
//! loses precision on platform snowflakes.

use serde::{Deserialize, Serialize};

/// Identity of the connected bot user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotIdentity {
    /// Bot user identifier.
    pub id: String,
    /// Bot user name.
    pub username: String,
    /// Number of guilds the bot is currently in.
    pub guilds: usize,
}

/// Health report for the process and its platform connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving.
    pub status: String,
    /// Bot identity once connected, `null` before.
    pub bot: Option<BotIdentity>,
}

impl HealthStatus {
    /// Builds the health report for the current connection state.
    #[must_use]
    pub fn report(bot: Option<BotIdentity>) -> Self {
        Self {
            status: "ok".to_owned(),
            bot,
        }
    }
}

/// One guild the bot is a member of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSummary {
    /// Guild identifier.
    pub id: String,
    /// Guild name.
    pub name: String,
    /// Icon hash, when the guild has one.
    pub icon: Option<String>,
    /// Total member count.
    pub member_count: u64,
}

/// One text-based channel within a guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Channel identifier.
    pub id: String,
    /// Channel name.
    pub name: String,
    /// Platform channel-type discriminant.
    #[serde(rename = "type")]
    pub channel_type: u8,
    /// Sort position within the guild.
    pub position: u16,
}

/// Author of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorView {
    /// User identifier.
    pub id: String,
    /// User name.
    pub username: String,
    /// Avatar hash, when the user has one.
    pub avatar: Option<String>,
    /// Whether the author is a bot user.
    pub bot: bool,
}

/// One attachment on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentView {
    /// Download URL.
    pub url: String,
    /// Original file name.
    pub name: String,
}

/// One channel message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageView {
    /// Message identifier.
    pub id: String,
    /// Message text.
    pub content: String,
    /// Message author.
    pub author: AuthorView,
    /// Creation time in Unix milliseconds.
    pub timestamp: i64,
    /// Attached files.
    #[serde(default)]
    pub attachments: Vec<AttachmentView>,
}
