pub mod config;
pub mod error;

pub use config::BankBotConfig;
pub use error::{BankBotError, Result};
