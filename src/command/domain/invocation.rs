//! Inbound command invocations and outbound replies.

use chrono::{DateTime, Utc};

/// One inbound command-invocation event.
///
/// Carries the command name and the platform timestamp of the triggering
/// interaction; borrowed by the dispatcher for the duration of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    name: String,
    invoked_at: DateTime<Utc>,
}

impl CommandInvocation {
    /// Creates an invocation for the named command.
    #[must_use]
    pub fn new(name: impl Into<String>, invoked_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            invoked_at,
        }
    }

    /// Returns the invoked command name without the leading slash.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the platform created the triggering interaction.
    #[must_use]
    pub const fn invoked_at(&self) -> DateTime<Utc> {
        self.invoked_at
    }
}

/// Content of a reply or follow-up message sent through the reply capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message text.
    pub content: String,
    /// Whether the message is visible only to the invoking user.
    pub ephemeral: bool,
}

impl Reply {
    /// Creates a reply visible to everyone in the channel.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// Creates a reply visible only to the invoking user.
    #[must_use]
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}
