//! Services for the command bounded context.

mod deploy;
mod dispatcher;
mod registry;

pub use deploy::DeployService;
pub use dispatcher::{Dispatcher, GENERIC_ERROR_REPLY};
pub use registry::CommandRegistry;
