// @zen-component: CHAT-MessageModel
//
//! Chat message model shared by the relay and the completion client.
//!
//! Messages serialize as `{"role": "...", "content": "..."}`, the shape both
//! the browser client and the completion API speak.

pub mod normalize;

use serde::{Deserialize, Serialize};

pub use normalize::normalize;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Grouping of roles that must alternate in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyClass {
    /// A human turn or a tool result (`user`, `tool`).
    Human,
    /// A model turn (`assistant`).
    Model,
}

impl Role {
    /// Party class of this role. `system` belongs to none.
    pub fn party_class(self) -> Option<PartyClass> {
        match self {
            Role::User | Role::Tool => Some(PartyClass::Human),
            Role::Assistant => Some(PartyClass::Model),
            Role::System => None,
        }
    }

    /// Whether a conversation may end on this role and still be sent upstream.
    pub fn is_terminal(self) -> bool {
        self.party_class() == Some(PartyClass::Human)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(Role::Tool, content)
    }

    /// True when both messages belong to the same party class.
    pub fn same_party(&self, other: &ChatMessage) -> bool {
        match (self.role.party_class(), other.role.party_class()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
