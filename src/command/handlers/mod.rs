//! Built-in slash-command handlers.
//!
//! The plugin-registration list built here replaces the original's runtime
//! directory scan: a fixed list assembled at startup and validated by the
//! registry with the same skip-and-warn policy.

pub mod ping;
pub mod uptime;

use chrono::{DateTime, Utc};

use crate::command::domain::CommandModule;

/// Returns the plugin-registration list of built-in commands.
#[must_use]
pub fn builtin_modules(started_at: DateTime<Utc>) -> Vec<CommandModule> {
    vec![ping::module(), uptime::module(started_at)]
}
