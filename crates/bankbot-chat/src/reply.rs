//! Reply generation.
//!
//! Maps a classified message to a reply string: fixed templates for greetings
//! and off-topic messages, backend delegation for banking questions.

use crate::backend::BankingBackend;
use crate::error::ChatError;
use crate::types::Classification;

/// Canned reply for greetings. No backend call is made.
pub const GREETING_REPLY: &str = "Hello 👋\n\n\
I'm **BankBot**, your banking assistant.\n\n\
You can ask me about:\n\
• Opening an account\n\
• Loans & EMI\n\
• Cards & ATM services";

/// Canned reply for off-topic messages. No backend call is made.
pub const OFF_TOPIC_REPLY: &str = "I'm here to help with **banking-related queries only**.\n\n\
Please ask about:\n\
• Accounts\n\
• Loans\n\
• Cards\n\
• ATM services";

/// Produces a reply for a classified message.
pub struct ReplyGenerator<B: BankingBackend> {
    backend: B,
}

impl<B: BankingBackend> ReplyGenerator<B> {
    /// Create a generator delegating banking questions to the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Generate a reply for `user_text` under the given classification.
    ///
    /// Only `BankingRelated` reaches the backend; its sanitized output is
    /// returned verbatim. The other two paths are static templates and
    /// cannot fail.
    pub async fn generate(
        &self,
        classification: Classification,
        user_text: &str,
    ) -> Result<String, ChatError> {
        match classification {
            Classification::Greeting => Ok(GREETING_REPLY.to_string()),
            Classification::OffTopic => Ok(OFF_TOPIC_REPLY.to_string()),
            Classification::BankingRelated => self.backend.ask(user_text).await,
        }
    }
}
