//! Session controller: the single entry point for user turns.
//!
//! Wires classifier, reply generator, and conversation store together and
//! owns exactly one active session at a time. One turn may be in flight per
//! controller; a second `submit` on a shared handle is rejected rather than
//! interleaved.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use uuid::Uuid;

use crate::backend::BankingBackend;
use crate::classifier::classify;
use crate::error::ChatError;
use crate::reply::ReplyGenerator;
use crate::store::ConversationStore;
use crate::types::{Message, Role, Session, SessionSummary};

/// User-visible assistant reply when the backend call fails. The turn still
/// completes; the user may simply submit again.
pub const BACKEND_FAILURE_REPLY: &str =
    "Sorry, I couldn't reach the assistant service. Please try again in a moment.";

/// Orchestrates one user's conversation turns over a single active session.
pub struct SessionController<B: BankingBackend> {
    generator: ReplyGenerator<B>,
    store: Mutex<ConversationStore>,
    current: Mutex<Session>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path of a turn.
struct TurnGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> TurnGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ChatError::TurnInProgress);
        }
        Ok(Self { flag })
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl<B: BankingBackend> SessionController<B> {
    /// Create a controller with a fresh empty session.
    pub fn new(backend: B) -> Self {
        let store = ConversationStore::new();
        let current = store.new_session();
        Self {
            generator: ReplyGenerator::new(backend),
            store: Mutex::new(store),
            current: Mutex::new(current),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Process one user turn.
    ///
    /// Whitespace-only input is silently ignored: no message is appended, no
    /// backend call is made, and `Ok(None)` is returned. Otherwise the user
    /// message is appended, classified, and answered; the assistant message
    /// is appended and returned. A backend failure does not fail the turn:
    /// the assistant message carries a user-visible error notice instead.
    pub async fn submit(&self, text: &str) -> Result<Option<Message>, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let _turn = TurnGuard::acquire(&self.in_flight)?;

        // Clone of the session handle; the transcript itself is shared.
        // No lock is held across the backend await.
        let session = self.current_session();
        session.append_turn(Role::User, trimmed);

        let classification = classify(trimmed);
        tracing::debug!(session_id = %session.id, ?classification, "Routing message");

        let reply = match self.generator.generate(classification, trimmed).await {
            Ok(reply) => reply,
            Err(ChatError::Backend(e)) => {
                tracing::warn!(session_id = %session.id, error = %e, "Backend call failed");
                BACKEND_FAILURE_REPLY.to_string()
            }
            Err(other) => return Err(other),
        };

        session.append_turn(Role::Assistant, &reply);
        Ok(session.messages().pop())
    }

    /// Discard the current session and start a fresh one.
    ///
    /// The discarded session is not archived; `save_chat` is the independent
    /// action for that.
    pub fn new_chat(&self) {
        let fresh = self
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .new_session();
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = fresh;
    }

    /// Archive the current session. The current session stays active.
    pub fn save_chat(&self) {
        let session = self.current_session();
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .archive(&session);
    }

    /// Replace the current session with an archived one.
    pub fn select_chat(&self, id: Uuid) -> Result<(), ChatError> {
        let loaded = self
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .load_from_archive(id)?;
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = loaded;
        Ok(())
    }

    /// Snapshot of the active transcript for the rendering boundary.
    pub fn transcript(&self) -> Vec<Message> {
        self.current_session().messages()
    }

    /// Summaries of all archived sessions.
    pub fn sessions(&self) -> Vec<SessionSummary> {
        self.store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .list_archive()
    }

    /// Identifier of the active session.
    pub fn session_id(&self) -> Uuid {
        self.current_session().id
    }

    fn current_session(&self) -> Session {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
