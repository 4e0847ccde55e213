//! Long-running server: HTTP facade plus the optional gateway connection.

use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use herald::command::handlers::builtin_modules;
use herald::command::services::{CommandRegistry, Dispatcher};
use herald::config::Config;
use herald::facade::adapters::serenity::{ConnectionState, SerenityChatGateway};
use herald::facade::ports::ChatGateway;
use herald::facade::routes::{AppState, router};
use herald::gateway;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let registry = Arc::new(CommandRegistry::load(builtin_modules(Utc::now())));
    let dispatcher = Arc::new(Dispatcher::new(registry));
    let connection = ConnectionState::new();

    let chat_gateway: Arc<dyn ChatGateway> = match &config.bot_token {
        Some(token) => {
            match gateway::build_client(token, dispatcher, connection.clone()).await {
                Ok(client) => {
                    let adapter = SerenityChatGateway::new(
                        Arc::clone(&client.cache),
                        Arc::clone(&client.http),
                        connection,
                    );
                    tokio::spawn(run_gateway(client));
                    Arc::new(adapter)
                }
                Err(build_error) => {
                    error!(error = %build_error, "gateway client construction failed");
                    Arc::new(SerenityChatGateway::disconnected(connection))
                }
            }
        }
        None => {
            warn!("no bot credential configured; serving the HTTP facade without a gateway connection");
            Arc::new(SerenityChatGateway::disconnected(connection))
        }
    };

    let app = router(AppState::new(chat_gateway));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(
        port = config.port,
        environment = %config.environment,
        "HTTP facade listening",
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_gateway(mut client: serenity::Client) {
    if let Err(connection_error) = client.start().await {
        error!(error = %connection_error, "gateway connection failed");
    }
}
