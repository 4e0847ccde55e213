//! Command metadata, plugin modules, and registry entries.
//!
//! A [`CommandModule`] reproduces the original duck-typed plugin shape: both
//! the metadata and the handler are optional until the registry validates the
//! module at load time. A [`CommandDefinition`] is the validated form held by
//! the registry for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::error::MetadataError;
use crate::command::ports::handler::CommandHandler;

/// Maximum command name length imposed by the chat platform.
pub const MAX_COMMAND_NAME_LENGTH: usize = 32;

/// Published metadata for a slash command.
///
/// Construction does not validate; the registry calls [`Self::validate`]
/// while loading so that a malformed entry degrades to a warning rather
/// than a startup failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Command name without the leading slash.
    pub name: String,
    /// Human-readable description shown by the platform client.
    pub description: String,
}

impl CommandMetadata {
    /// Creates command metadata.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Checks the metadata against the platform-imposed limits.
    ///
    /// Names must be 1 to [`MAX_COMMAND_NAME_LENGTH`] characters of lowercase
    /// ASCII alphanumerics, `-`, or `_`. Descriptions must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] describing the first violated limit.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.name.is_empty() {
            return Err(MetadataError::EmptyName);
        }
        if let Some(invalid) = self
            .name
            .chars()
            .find(|ch| !matches!(ch, 'a'..='z' | '0'..='9' | '-' | '_'))
        {
            return Err(MetadataError::InvalidNameCharacter {
                name: self.name.clone(),
                character: invalid,
            });
        }
        // Counted in characters; the permitted set is ASCII, so this only
        // differs from the byte length for names already rejected above.
        let length = self.name.chars().count();
        if length > MAX_COMMAND_NAME_LENGTH {
            return Err(MetadataError::NameTooLong {
                name: self.name.clone(),
                length,
            });
        }
        if self.description.is_empty() {
            return Err(MetadataError::EmptyDescription {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A plugin-registration entry supplied to the registry at startup.
///
/// Mirrors the load-time contract of the original command directory scan:
/// an entry missing either field is skipped with a warning, never a fatal
/// error.
#[derive(Clone)]
pub struct CommandModule {
    /// Label used in load-time warnings to identify the module.
    pub source: String,
    /// Command metadata, when the module provides it.
    pub metadata: Option<CommandMetadata>,
    /// Command handler, when the module provides it.
    pub handler: Option<Arc<dyn CommandHandler>>,
}

impl CommandModule {
    /// Creates an empty module with the given source label.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            metadata: None,
            handler: None,
        }
    }

    /// Attaches command metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: CommandMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attaches a command handler.
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handler = Some(handler);
        self
    }
}

impl fmt::Debug for CommandModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandModule")
            .field("source", &self.source)
            .field("metadata", &self.metadata)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// A validated registry entry pairing metadata with its handler.
#[derive(Clone)]
pub struct CommandDefinition {
    metadata: CommandMetadata,
    handler: Arc<dyn CommandHandler>,
}

impl CommandDefinition {
    /// Creates a registry entry from validated metadata and a handler.
    #[must_use]
    pub const fn new(metadata: CommandMetadata, handler: Arc<dyn CommandHandler>) -> Self {
        Self { metadata, handler }
    }

    /// Returns the command metadata.
    #[must_use]
    pub const fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    /// Returns the command handler.
    #[must_use]
    pub fn handler(&self) -> &dyn CommandHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
