//! Domain types for the command bounded context.

mod definition;
mod error;
mod invocation;

pub use definition::{
    CommandDefinition, CommandMetadata, CommandModule, MAX_COMMAND_NAME_LENGTH,
};
pub use error::{CommandError, CommandResult, MetadataError, ReplyError, ReplyResult};
pub use invocation::{CommandInvocation, Reply};
