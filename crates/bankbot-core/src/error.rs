use thiserror::Error;

/// Top-level error type for the BankBot system.
///
/// Subsystem crates define their own error types and convert into this one
/// at crate boundaries so that the `?` operator works seamlessly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for BankBotError {
    fn from(err: toml::de::Error) -> Self {
        BankBotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BankBotError {
    fn from(err: toml::ser::Error) -> Self {
        BankBotError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BankBotError {
    fn from(err: serde_json::Error) -> Self {
        BankBotError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for BankBot operations.
pub type Result<T> = std::result::Result<T, BankBotError>;
