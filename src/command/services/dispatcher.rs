//! Dispatch of inbound command invocations to registry handlers.

use std::sync::Arc;
use tracing::error;

use crate::command::domain::{CommandInvocation, Reply};
use crate::command::ports::reply::InteractionReply;
use crate::command::services::registry::CommandRegistry;

/// Generic localized notice sent to the user when a handler fails.
pub const GENERIC_ERROR_REPLY: &str = "コマンドの実行中にエラーが発生しました。";

/// Resolves inbound invocations against the registry and runs their handlers.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher over the loaded registry.
    #[must_use]
    pub const fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatches one command invocation.
    ///
    /// Unknown commands are ignored without logging. Handler failures are
    /// logged and surfaced to the user as an ephemeral generic error notice:
    /// a primary reply when the interaction has not been acknowledged yet,
    /// otherwise a follow-up. The platform rejects a second primary reply,
    /// so the acknowledged state decides the send method.
    pub async fn dispatch(&self, invocation: &CommandInvocation, reply: &mut dyn InteractionReply) {
        let Some(definition) = self.registry.lookup(invocation.name()) else {
            return;
        };
        if let Err(failure) = definition.handler().run(invocation, reply).await {
            error!(command = invocation.name(), error = %failure, "command handler failed");
            let notice = Reply::ephemeral(GENERIC_ERROR_REPLY);
            let delivery = if reply.is_acknowledged() {
                reply.follow_up(notice).await
            } else {
                reply.reply(notice).await
            };
            if let Err(send_failure) = delivery {
                error!(
                    command = invocation.name(),
                    error = %send_failure,
                    "failed to deliver error notice",
                );
            }
        }
    }
}
