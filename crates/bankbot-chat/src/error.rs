//! Error types for the conversational engine.

/// Errors from the chat engine.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("session not found: {0}")]
    SessionNotFound(uuid::Uuid),
    #[error("a turn is already in progress")]
    TurnInProgress,
}

impl From<ChatError> for bankbot_core::BankBotError {
    fn from(err: ChatError) -> Self {
        bankbot_core::BankBotError::Chat(err.to_string())
    }
}
