//! Herald: a chat-platform command bridge with a REST facade.
//!
//! Herald logs into a chat-platform gateway through the `serenity` client,
//! registers a handful of slash commands, and serves a small REST API that
//! proxies guild, channel, and message data through the same connected
//! client. A separate one-shot deploy tool publishes the command schemas.
//!
//! # Architecture
//!
//! Herald follows hexagonal architecture principles:
//!
//! - **Domain**: command metadata, invocations, and JSON view models
//! - **Ports**: abstract trait interfaces for handlers, replies, command
//!   publication, and the chat gateway
//! - **Adapters**: serenity-backed implementations of the ports plus
//!   in-memory test doubles
//!
//! # Modules
//!
//! - [`command`]: slash-command registry, dispatch, and deployment
//! - [`facade`]: the REST facade over the connected client
//! - [`gateway`]: gateway connection and event translation
//! - [`config`]: environment configuration

pub mod command;
pub mod config;
pub mod facade;
pub mod gateway;
pub mod snowflake;
