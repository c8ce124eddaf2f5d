//! # vitbot_core
//!
//! Core domain logic for VIT Bot: the chat message model, conversation
//! normalization, the domain system prompt, and the completion API client.

pub mod chat;
pub mod completion;
pub mod prompt;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
