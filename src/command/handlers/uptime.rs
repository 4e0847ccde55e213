//! Process uptime report.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

use crate::command::domain::{
    CommandInvocation, CommandMetadata, CommandModule, CommandResult, Reply,
};
use crate::command::ports::handler::CommandHandler;
use crate::command::ports::reply::InteractionReply;

/// Handler that reports how long the process has been running.
#[derive(Debug, Clone)]
pub struct Uptime<C> {
    started_at: DateTime<Utc>,
    clock: C,
}

impl Uptime<DefaultClock> {
    /// Creates the handler with the system clock.
    #[must_use]
    pub const fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            clock: DefaultClock,
        }
    }
}

impl<C> Uptime<C>
where
    C: Clock,
{
    /// Creates the handler with an injected clock for deterministic tests.
    #[must_use]
    pub const fn with_clock(started_at: DateTime<Utc>, clock: C) -> Self {
        Self { started_at, clock }
    }
}

#[async_trait]
impl<C> CommandHandler for Uptime<C>
where
    C: Clock + Send + Sync,
{
    async fn run(
        &self,
        _invocation: &CommandInvocation,
        reply: &mut dyn InteractionReply,
    ) -> CommandResult<()> {
        let elapsed = self.clock.utc() - self.started_at;
        let days = elapsed.num_days();
        let hours = elapsed.num_hours() - days * 24;
        let minutes = elapsed.num_minutes() - elapsed.num_hours() * 60;
        let seconds = elapsed.num_seconds() - elapsed.num_minutes() * 60;
        reply
            .reply(Reply::new(format!(
                "⏱️ 稼働時間: {days}日 {hours}時間 {minutes}分 {seconds}秒"
            )))
            .await?;
        Ok(())
    }
}

/// Builds the plugin-registration entry for `/uptime`.
#[must_use]
pub fn module(started_at: DateTime<Utc>) -> CommandModule {
    CommandModule::new("uptime")
        .with_metadata(CommandMetadata::new("uptime", "Botの稼働時間を表示します"))
        .with_handler(Arc::new(Uptime::new(started_at)))
}
