//! Conversation store.
//!
//! Owns the in-memory archive of saved sessions and the operations that
//! create sessions, append turns, and resume archived chats. Nothing here
//! touches disk: all state lives for the process lifetime only.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use uuid::Uuid;

use crate::error::ChatError;
use crate::types::{ArchivedSession, Message, Role, Session, SessionSummary};

/// Title used when a session has no user message yet.
const DEFAULT_TITLE: &str = "New Chat";

/// Maximum number of characters in a derived session title.
const TITLE_MAX_CHARS: usize = 40;

impl Session {
    /// Append a message stamped with the current wall-clock time.
    ///
    /// Append-only: prior entries are never mutated or reordered. Infallible.
    pub fn append_turn(&self, role: Role, content: &str) {
        let message = Message {
            role,
            content: content.to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
        };
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Snapshot of the transcript in conversation order.
    pub fn messages(&self) -> Vec<Message> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// In-memory session archive, most-recently-archived first.
#[derive(Default)]
pub struct ConversationStore {
    archive: Vec<ArchivedSession>,
}

impl ConversationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a session with a fresh unique identifier and empty transcript.
    pub fn new_session(&self) -> Session {
        Session {
            id: Uuid::new_v4(),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Save a snapshot of the session at the front of the archive.
    ///
    /// Archiving a session with an empty transcript is a no-op. The title is
    /// derived from the first user message, truncated to 40 characters.
    pub fn archive(&mut self, session: &Session) {
        let snapshot = session.messages();
        if snapshot.is_empty() {
            return;
        }

        let title = derive_title(&snapshot);
        tracing::debug!(session_id = %session.id, %title, "Archiving session");

        self.archive.insert(
            0,
            ArchivedSession {
                id: session.id,
                title,
                transcript: Arc::new(Mutex::new(snapshot)),
            },
        );
    }

    /// Summaries of all archived sessions, in archive order.
    pub fn list_archive(&self) -> Vec<SessionSummary> {
        self.archive
            .iter()
            .map(|s| SessionSummary {
                id: s.id,
                title: s.title.clone(),
                message_count: s
                    .transcript
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .len(),
            })
            .collect()
    }

    /// Resume an archived session.
    ///
    /// The returned session shares the stored transcript, so turns appended
    /// after resuming are visible to later loads of the same identifier.
    pub fn load_from_archive(&self, id: Uuid) -> Result<Session, ChatError> {
        self.archive
            .iter()
            .find(|s| s.id == id)
            .map(|s| Session {
                id: s.id,
                transcript: Arc::clone(&s.transcript),
            })
            .ok_or(ChatError::SessionNotFound(id))
    }
}

/// First user message truncated to the title limit, or the default title.
fn derive_title(messages: &[Message]) -> String {
    messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.chars().take(TITLE_MAX_CHARS).collect())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
