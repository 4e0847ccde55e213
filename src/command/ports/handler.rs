//! Command handler port.

use async_trait::async_trait;

use crate::command::domain::{CommandInvocation, CommandResult};
use crate::command::ports::reply::InteractionReply;

/// Port implemented by each slash-command handler.
///
/// Handlers receive the invocation and a borrowed reply capability; they
/// produce their effect by sending replies and must propagate failures so
/// the dispatcher can deliver the generic error notice.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Executes the command for one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::CommandError`] when the handler or
    /// any reply it sends fails.
    async fn run(
        &self,
        invocation: &CommandInvocation,
        reply: &mut dyn InteractionReply,
    ) -> CommandResult<()>;
}
