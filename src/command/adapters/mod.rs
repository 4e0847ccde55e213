//! Platform-backed adapters for the command ports.

pub mod serenity;
