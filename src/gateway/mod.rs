//! Platform gateway connection and event translation.
//!
//! Owns the serenity client bootstrap and the event handler that turns
//! inbound interaction events into dispatcher calls. Everything that is not
//! a chat command invocation is ignored here, so the dispatcher only ever
//! sees command invocations.

use serenity::async_trait;
use serenity::client::{Client, Context, EventHandler};
use serenity::model::application::Interaction;
use serenity::model::gateway::{GatewayIntents, Ready};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::command::adapters::serenity::SerenityReply;
use crate::command::domain::CommandInvocation;
use crate::command::services::Dispatcher;
use crate::facade::adapters::serenity::ConnectionState;
use crate::facade::domain::BotIdentity;
use crate::snowflake;

/// Errors raised while building the gateway client.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The client could not be constructed.
    #[error("failed to build gateway client: {0}")]
    Build(String),
}

struct Handler {
    dispatcher: Arc<Dispatcher>,
    connection: ConnectionState,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(user = %ready.user.name, guilds = ready.guilds.len(), "gateway connected");
        self.connection.mark_ready(BotIdentity {
            id: ready.user.id.to_string(),
            username: ready.user.name.clone(),
            guilds: ready.guilds.len(),
        });
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let invocation = CommandInvocation::new(
            command.data.name.clone(),
            snowflake::created_at(command.id.get()),
        );
        let mut reply = SerenityReply::new(Arc::clone(&ctx.http), &command);
        self.dispatcher.dispatch(&invocation, &mut reply).await;
    }
}

/// Builds a gateway client wired to the dispatcher.
///
/// The caller owns starting the connection; construction does not touch the
/// network.
///
/// # Errors
///
/// Returns [`GatewayError::Build`] when client construction fails.
pub async fn build_client(
    token: &str,
    dispatcher: Arc<Dispatcher>,
    connection: ConnectionState,
) -> Result<Client, GatewayError> {
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    Client::builder(token, intents)
        .event_handler(Handler {
            dispatcher,
            connection,
        })
        .await
        .map_err(|error| GatewayError::Build(error.to_string()))
}
