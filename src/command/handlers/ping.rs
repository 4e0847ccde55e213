//! Round-trip latency check.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

use crate::command::domain::{
    CommandInvocation, CommandMetadata, CommandModule, CommandResult, Reply,
};
use crate::command::ports::handler::CommandHandler;
use crate::command::ports::reply::InteractionReply;

/// Handler that replies with the measured round-trip latency.
///
/// Sends a provisional reply, then edits it with the elapsed time between
/// the interaction's platform timestamp and the clock's now.
#[derive(Debug, Clone)]
pub struct Ping<C> {
    clock: C,
}

impl Ping<DefaultClock> {
    /// Creates the handler with the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: DefaultClock,
        }
    }
}

impl Default for Ping<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Ping<C>
where
    C: Clock,
{
    /// Creates the handler with an injected clock for deterministic tests.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl<C> CommandHandler for Ping<C>
where
    C: Clock + Send + Sync,
{
    async fn run(
        &self,
        invocation: &CommandInvocation,
        reply: &mut dyn InteractionReply,
    ) -> CommandResult<()> {
        reply.reply(Reply::new("Pinging...")).await?;
        let latency = self.clock.utc() - invocation.invoked_at();
        reply
            .edit_reply(&format!(
                "🏓 Pong!\n📡 レイテンシ: {}ms",
                latency.num_milliseconds()
            ))
            .await?;
        Ok(())
    }
}

/// Builds the plugin-registration entry for `/ping`.
#[must_use]
pub fn module() -> CommandModule {
    CommandModule::new("ping")
        .with_metadata(CommandMetadata::new("ping", "Botの応答速度を確認します"))
        .with_handler(Arc::new(Ping::new()))
}
