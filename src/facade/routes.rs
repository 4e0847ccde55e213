//! Route handlers translating REST calls into chat-gateway calls.
//!
//! Each route is an independent translation: required parameters are
//! validated, the referenced entity is looked up through the gateway port,
//! and absence, invalid input, and library failures map to 404, 400, and
//! 500 with a JSON error body. No cross-route state.

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::facade::domain::{ChannelSummary, GuildSummary, HealthStatus, MessageView};
use crate::facade::ports::{ChatGateway, ChatGatewayError};

/// Number of messages served when the query omits `limit`.
pub const DEFAULT_MESSAGE_LIMIT: u8 = 50;

/// Dependency-injected state shared by the route handlers.
#[derive(Clone)]
pub struct AppState {
    gateway: Arc<dyn ChatGateway>,
}

impl AppState {
    /// Creates route state over a chat gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        Self { gateway }
    }
}

/// Builds the facade router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/guilds", get(guilds))
        .route("/api/guilds/:guild_id/channels", get(guild_channels))
        .route(
            "/api/channels/:channel_id/messages",
            get(channel_messages).post(create_message),
        )
        .with_state(state)
}

/// Error payload for every non-2xx facade response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The gateway connection is not established yet.
    #[error("Bot not ready")]
    NotReady,

    /// The referenced guild is not in the cache.
    #[error("Guild not found")]
    GuildNotFound,

    /// The referenced channel is not in the cache.
    #[error("Channel not found")]
    ChannelNotFound,

    /// The request body is missing the message content.
    #[error("Content required")]
    ContentRequired,

    /// The `limit` query parameter is not a usable count.
    #[error("Invalid limit")]
    InvalidLimit,

    /// The underlying library call failed.
    #[error("{0}")]
    Platform(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            Self::GuildNotFound | Self::ChannelNotFound => StatusCode::NOT_FOUND,
            Self::ContentRequired | Self::InvalidLimit => StatusCode::BAD_REQUEST,
            Self::Platform(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ChatGatewayError> for ApiError {
    fn from(error: ChatGatewayError) -> Self {
        match error {
            ChatGatewayError::ChannelNotFound => Self::ChannelNotFound,
            ChatGatewayError::Platform(reason) => Self::Platform(reason),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::report(state.gateway.bot_identity()))
}

async fn guilds(State(state): State<AppState>) -> Result<Json<Vec<GuildSummary>>, ApiError> {
    if state.gateway.bot_identity().is_none() {
        return Err(ApiError::NotReady);
    }
    Ok(Json(state.gateway.guilds()))
}

async fn guild_channels(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<Json<Vec<ChannelSummary>>, ApiError> {
    state
        .gateway
        .guild_channels(&guild_id)
        .map(Json)
        .ok_or(ApiError::GuildNotFound)
}

#[derive(Debug, Deserialize)]
struct MessagesQuery {
    limit: Option<String>,
}

// The limit is parsed by hand so a bad value still yields the facade's
// JSON error body rather than the extractor's plain-text rejection.
fn parse_limit(raw: Option<&str>) -> Result<u8, ApiError> {
    raw.map_or(Ok(DEFAULT_MESSAGE_LIMIT), |value| {
        value.parse().map_err(|_| ApiError::InvalidLimit)
    })
}

async fn channel_messages(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    Query(query): Query<MessagesQuery>,
) -> Result<Json<Vec<MessageView>>, ApiError> {
    let limit = parse_limit(query.limit.as_deref())?;
    let messages = state.gateway.recent_messages(&channel_id, limit).await?;
    Ok(Json(messages))
}

#[derive(Debug, Deserialize)]
struct CreateMessageBody {
    content: Option<String>,
}

async fn create_message(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
    body: Option<Json<CreateMessageBody>>,
) -> Result<Json<MessageView>, ApiError> {
    let content = body
        .and_then(|Json(request)| request.content)
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::ContentRequired)?;
    let message = state.gateway.send_message(&channel_id, &content).await?;
    Ok(Json(message))
}
