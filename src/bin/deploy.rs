//! One-shot deploy tool: publishes the command schemas to the platform.
//!
//! Loads the same built-in command list as the server, serialises the
//! metadata, and calls the administrative bulk-replace endpoint for the
//! configured application identity. A failure is terminal for the run;
//! there is no retry.

use chrono::Utc;
use eyre::eyre;
use serenity::http::HttpBuilder;
use serenity::model::id::ApplicationId;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use herald::command::adapters::serenity::HttpCommandPublisher;
use herald::command::handlers::builtin_modules;
use herald::command::services::{CommandRegistry, DeployService};
use herald::config::{APP_ID_VAR, BOT_TOKEN_VAR, Config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let token = config
        .bot_token
        .ok_or_else(|| eyre!("{BOT_TOKEN_VAR} is required to deploy commands"))?;
    let application_id = config
        .application_id
        .ok_or_else(|| eyre!("{APP_ID_VAR} is required to deploy commands"))?;

    let registry = Arc::new(CommandRegistry::load(builtin_modules(Utc::now())));
    let http = HttpBuilder::new(&token)
        .application_id(ApplicationId::new(application_id))
        .build();
    let service = DeployService::new(registry, HttpCommandPublisher::new(Arc::new(http)));

    let published = service.publish().await?;
    info!(count = published, "command deployment complete");
    Ok(())
}
