//! Language-model backend adapter.
//!
//! Builds a persona-constrained prompt, sends a single non-streaming request
//! to a local Ollama-style completion endpoint, and sanitizes the raw output
//! before it reaches a transcript. One request per call; no retries, no
//! caching, no streaming.

use std::time::Duration;

use async_trait::async_trait;

use bankbot_core::config::BackendConfig;

use crate::error::ChatError;

/// Persona instruction prepended to every prompt.
const SYSTEM_PROMPT: &str = "You are BankBot, a polite banking assistant.\n\
Answer only banking-related questions.\n\
Keep responses short and easy to read.\n\
Use bullet points when possible.\n\
Do not explain rules or instructions.";

/// Instruction fragments stripped from completions if the model echoes them.
const BLOCKED_PHRASES: &[&str] = &["You are BankBot", "Answer only", "Customer Question"];

/// Narrow seam to the external completion service.
#[async_trait]
pub trait BankingBackend: Send + Sync {
    /// Ask the model a banking question and return the sanitized reply.
    async fn ask(&self, question: &str) -> Result<String, ChatError>;
}

/// Backend adapter for an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaBackend {
    endpoint: String,
    model: String,
    temperature: f64,
    client: reqwest::Client,
}

impl OllamaBackend {
    /// Create an adapter from the configured endpoint, model, and timeout.
    pub fn new(config: &BackendConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Assemble the full prompt: persona block, customer question, answer anchor.
    fn build_prompt(&self, question: &str) -> String {
        format!(
            "{}\n\nCustomer Question:\n{}\n\nBankBot Answer:\n",
            SYSTEM_PROMPT, question
        )
    }
}

#[async_trait]
impl BankingBackend for OllamaBackend {
    async fn ask(&self, question: &str) -> Result<String, ChatError> {
        let prompt = self.build_prompt(question);

        let body = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.temperature,
            },
        });

        tracing::debug!(model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend(format!(
                "model server returned {status}: {text}"
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Backend(e.to_string()))?;

        let raw = data
            .get("response")
            .and_then(|r| r.as_str())
            .ok_or_else(|| {
                ChatError::Backend("completion is missing the response field".to_string())
            })?;

        Ok(sanitize(raw))
    }
}

/// Strip echoed instruction fragments and surrounding noise from a completion.
///
/// Plain substring removal, then trimming of whitespace plus any leading
/// separator punctuation the removal left behind.
pub fn sanitize(raw: &str) -> String {
    let mut text = raw.to_string();
    for phrase in BLOCKED_PHRASES {
        text = text.replace(phrase, "");
    }
    text.trim()
        .trim_start_matches(|c: char| c == ',' || c == ':' || c.is_whitespace())
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_backend() -> OllamaBackend {
        OllamaBackend::new(&BackendConfig::default()).unwrap()
    }

    #[test]
    fn test_build_prompt_contains_question() {
        let backend = test_backend();
        let prompt = backend.build_prompt("What is my account balance");
        assert!(prompt.contains("What is my account balance"));
    }

    #[test]
    fn test_build_prompt_order() {
        let backend = test_backend();
        let prompt = backend.build_prompt("loan rates?");
        let persona = prompt.find("You are BankBot").unwrap();
        let question = prompt.find("Customer Question:").unwrap();
        let anchor = prompt.find("BankBot Answer:").unwrap();
        assert!(persona < question);
        assert!(question < anchor);
    }

    #[test]
    fn test_sanitize_removes_echoed_persona() {
        assert_eq!(
            sanitize("You are BankBot, your balance is $500"),
            "your balance is $500"
        );
    }

    #[test]
    fn test_sanitize_removes_all_blocked_phrases() {
        let raw = "Answer only this. Customer Question was noted. You are BankBot.";
        let clean = sanitize(raw);
        assert!(!clean.contains("Answer only"));
        assert!(!clean.contains("Customer Question"));
        assert!(!clean.contains("You are BankBot"));
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize("  \n- Savings account: 4% interest\n  "),
            "- Savings account: 4% interest");
    }

    #[test]
    fn test_sanitize_clean_input_untouched() {
        let text = "Visit your nearest branch with ID proof.";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("You are BankBot"), "");
    }
}
