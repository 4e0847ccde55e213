//! Port traits for the command bounded context.

pub mod handler;
pub mod publisher;
pub mod reply;
