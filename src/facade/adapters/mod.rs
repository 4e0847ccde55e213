//! Chat-gateway adapters for the HTTP facade.

pub mod memory;
pub mod serenity;
