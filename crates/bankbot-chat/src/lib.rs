//! Conversational engine for BankBot.
//!
//! Classifies incoming messages, routes them to a canned reply or the
//! language-model backend, and manages conversation sessions and their
//! in-memory archive.

pub mod backend;
pub mod classifier;
pub mod controller;
pub mod error;
pub mod reply;
pub mod store;
pub mod types;

pub use backend::{BankingBackend, OllamaBackend};
pub use classifier::classify;
pub use controller::SessionController;
pub use error::ChatError;
pub use reply::ReplyGenerator;
pub use store::ConversationStore;
pub use types::{ArchivedSession, Classification, Message, Role, Session, SessionSummary, Transcript};
