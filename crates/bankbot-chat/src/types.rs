//! Shared types for the conversational engine.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a message within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Lowercase wire/display name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single exchanged message. Immutable once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Wall-clock time of day the message was appended, formatted `HH:MM`.
    pub timestamp: String,
}

/// An ordered, append-only list of messages, shared by handle.
///
/// The shared handle is what makes resuming an archived chat work: a session
/// loaded from the archive aliases the stored transcript, so later appends
/// land in the archived copy directly.
pub type Transcript = Arc<Mutex<Vec<Message>>>;

/// One conversation thread: an opaque identifier plus its transcript.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub transcript: Transcript,
}

/// A saved session in the archive.
#[derive(Debug, Clone)]
pub struct ArchivedSession {
    pub id: Uuid,
    /// Derived from the first user message, truncated to 40 characters.
    pub title: String,
    pub transcript: Transcript,
}

/// Summary of an archived session for the rendering boundary.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub title: String,
    pub message_count: usize,
}

/// Categorical label controlling which reply path a message takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Greeting,
    BankingRelated,
    OffTopic,
}
