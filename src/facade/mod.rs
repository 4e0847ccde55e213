//! HTTP facade over the connected chat client.
//!
//! - **Domain**: JSON view models matching the dashboard wire shapes
//! - **Ports**: [`ports::ChatGateway`] abstracting the client's cache and
//!   REST calls
//! - **Adapters**: [`adapters::serenity::SerenityChatGateway`] for the live
//!   client, [`adapters::memory::InMemoryChatGateway`] for tests
//! - **Routes**: the axum router and its error mapping

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod routes;

#[cfg(test)]
mod tests;
