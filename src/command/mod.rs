//! Slash-command registry, dispatch, and deployment.
//!
//! This module implements the command bounded context:
//!
//! - **Domain**: command metadata, plugin modules, invocations, replies
//! - **Ports**: [`ports::handler::CommandHandler`],
//!   [`ports::reply::InteractionReply`],
//!   [`ports::publisher::CommandPublisher`]
//! - **Services**: [`services::CommandRegistry`], [`services::Dispatcher`],
//!   [`services::DeployService`]
//! - **Handlers**: the built-in plugin-registration list
//! - **Adapters**: serenity-backed implementations of the ports

pub mod adapters;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
