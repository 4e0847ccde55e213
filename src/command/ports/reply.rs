//! Interaction reply-capability port.
//!
//! The capability tracks whether the interaction has been acknowledged
//! (replied to or deferred). The platform rejects a second primary reply,
//! so the dispatcher consults [`InteractionReply::is_acknowledged`] before
//! choosing between a primary reply and a follow-up.

use async_trait::async_trait;

use crate::command::domain::{Reply, ReplyResult};

/// Port for replying to one interaction event.
///
/// Borrowed for the duration of a single dispatch; implementations are the
/// platform-backed adapter and test doubles.
#[async_trait]
pub trait InteractionReply: Send {
    /// Sends the primary reply for the interaction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::ReplyError::AlreadyAcknowledged`]
    /// when a primary reply was already sent, or a platform error when the
    /// underlying call fails.
    async fn reply(&mut self, reply: Reply) -> ReplyResult<()>;

    /// Sends a supplementary follow-up message.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::ReplyError::NotAcknowledged`] when
    /// no primary reply was sent yet, or a platform error when the
    /// underlying call fails.
    async fn follow_up(&mut self, reply: Reply) -> ReplyResult<()>;

    /// Edits the content of the primary reply.
    ///
    /// # Errors
    ///
    /// Returns [`crate::command::domain::ReplyError::NotAcknowledged`] when
    /// no primary reply was sent yet, or a platform error when the
    /// underlying call fails.
    async fn edit_reply(&mut self, content: &str) -> ReplyResult<()>;

    /// Whether the interaction has been replied to or deferred.
    fn is_acknowledged(&self) -> bool;
}
