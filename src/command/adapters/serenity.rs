//! Serenity-backed adapters for the command ports.

use async_trait::async_trait;
use serenity::builder::{
    CreateCommand, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::http::Http;
use serenity::model::application::{Command, CommandInteraction};
use std::sync::Arc;

use crate::command::domain::{CommandMetadata, Reply, ReplyError, ReplyResult};
use crate::command::ports::publisher::{CommandPublisher, PublishError, PublishResult};
use crate::command::ports::reply::InteractionReply;

/// Reply capability backed by one serenity command interaction.
///
/// Tracks the acknowledged state locally so a second primary reply is
/// refused before it ever reaches the platform.
pub struct SerenityReply<'a> {
    http: Arc<Http>,
    interaction: &'a CommandInteraction,
    acknowledged: bool,
}

impl<'a> SerenityReply<'a> {
    /// Creates the capability for one interaction.
    #[must_use]
    pub const fn new(http: Arc<Http>, interaction: &'a CommandInteraction) -> Self {
        Self {
            http,
            interaction,
            acknowledged: false,
        }
    }
}

#[async_trait]
impl InteractionReply for SerenityReply<'_> {
    async fn reply(&mut self, reply: Reply) -> ReplyResult<()> {
        if self.acknowledged {
            return Err(ReplyError::AlreadyAcknowledged);
        }
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);
        self.interaction
            .create_response(&self.http, CreateInteractionResponse::Message(message))
            .await
            .map_err(platform_error)?;
        self.acknowledged = true;
        Ok(())
    }

    async fn follow_up(&mut self, reply: Reply) -> ReplyResult<()> {
        if !self.acknowledged {
            return Err(ReplyError::NotAcknowledged);
        }
        let message = CreateInteractionResponseFollowup::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);
        self.interaction
            .create_followup(&self.http, message)
            .await
            .map_err(platform_error)?;
        Ok(())
    }

    async fn edit_reply(&mut self, content: &str) -> ReplyResult<()> {
        if !self.acknowledged {
            return Err(ReplyError::NotAcknowledged);
        }
        self.interaction
            .edit_response(&self.http, EditInteractionResponse::new().content(content))
            .await
            .map_err(platform_error)?;
        Ok(())
    }

    fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

fn platform_error(error: serenity::Error) -> ReplyError {
    ReplyError::Platform(error.to_string())
}

/// Publisher backed by the platform's global application-command endpoint.
#[derive(Clone)]
pub struct HttpCommandPublisher {
    http: Arc<Http>,
}

impl HttpCommandPublisher {
    /// Creates a publisher over an HTTP client with its application identity
    /// already configured.
    #[must_use]
    pub const fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl CommandPublisher for HttpCommandPublisher {
    async fn replace_all(&self, commands: &[CommandMetadata]) -> PublishResult<usize> {
        let schemas: Vec<CreateCommand> = commands.iter().map(create_command).collect();
        let registered = Command::set_global_commands(&self.http, schemas)
            .await
            .map_err(|error| PublishError::Platform(error.to_string()))?;
        Ok(registered.len())
    }
}

fn create_command(metadata: &CommandMetadata) -> CreateCommand {
    CreateCommand::new(metadata.name.clone()).description(metadata.description.clone())
}
