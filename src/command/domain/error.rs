//! Domain error types for command loading and execution.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use thiserror::Error;

use super::definition::MAX_COMMAND_NAME_LENGTH;

/// Result type for command handler execution.
pub type CommandResult<T> = Result<T, CommandError>;

/// Load-time violations of the platform-imposed metadata limits.
///
/// These are warnings, not failures: the registry skips the offending
/// module and keeps loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    /// The command name is empty.
    #[error("command name must not be empty")]
    EmptyName,

    /// The command name exceeds the platform limit.
    #[error("command name '{name}' is {length} characters, exceeds limit of {MAX_COMMAND_NAME_LENGTH}")]
    NameTooLong {
        /// The offending name.
        name: String,
        /// Its length in characters.
        length: usize,
    },

    /// The command name contains a character outside the platform charset.
    #[error("command name '{name}' contains invalid character '{character}'")]
    InvalidNameCharacter {
        /// The offending name.
        name: String,
        /// The first invalid character found.
        character: char,
    },

    /// The command description is empty.
    #[error("command '{name}' has an empty description")]
    EmptyDescription {
        /// The command whose description is missing.
        name: String,
    },
}

/// Errors raised by command handlers during dispatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Sending a reply through the platform failed.
    #[error(transparent)]
    Reply(#[from] ReplyError),

    /// The handler failed for a reason of its own.
    #[error("command failed: {0}")]
    Failed(String),
}

/// Result type for reply-capability operations.
pub type ReplyResult<T> = Result<T, ReplyError>;

/// Errors raised by the interaction reply capability.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplyError {
    /// A primary reply was attempted after the interaction was already
    /// acknowledged. The platform rejects a second primary reply.
    #[error("interaction already replied to or deferred")]
    AlreadyAcknowledged,

    /// A follow-up or edit was attempted before any primary reply.
    #[error("interaction has not been replied to yet")]
    NotAcknowledged,

    /// The underlying platform call failed.
    #[error("platform reply failed: {0}")]
    Platform(String),
}
