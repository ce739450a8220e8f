//! Message classification.
//!
//! Decides whether an incoming message is a greeting, a banking-related
//! question, or off-topic. Intentionally naive substring matching on the
//! lowercased input: no tokenization, no negation handling ("I don't want a
//! loan" still counts as banking). Downstream routing depends on exactly
//! these semantics.

use crate::types::Classification;

/// Keywords that mark a message as a greeting.
static GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "good morning", "good evening"];

/// Domain terms that mark a message as banking-related.
static BANKING_TERMS: &[&str] = &[
    "account",
    "loan",
    "emi",
    "interest",
    "card",
    "atm",
    "balance",
    "transaction",
    "ifsc",
    "branch",
    "bank",
];

/// Classify a raw message.
///
/// Pure and total: any input, including the empty string, yields a label.
/// Greeting takes precedence when both a greeting keyword and a banking term
/// are present.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    if GREETING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Classification::Greeting;
    }

    if BANKING_TERMS.iter().any(|term| lower.contains(term)) {
        return Classification::BankingRelated;
    }

    Classification::OffTopic
}
