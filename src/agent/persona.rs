//! Honeypot persona — canned stalling replies.
//!
//! The persona never refuses and never lets on that it has spotted the
//! scam. Each reply nudges the other side into sending more details.
//!
//! Only the latest message picks the reply; earlier turns feed the scam
//! score but not the choice of words.

use serde::{Deserialize, Serialize};

/// Reply rules in priority order. The first rule whose trigger appears in
/// the latest message wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyRule {
    /// "payment" / "upi" — ask for the exact handle or account number.
    AskPaymentDetails,
    /// "link" / "verify" — play confused, ask for a resend.
    ConfusedByLink,
    /// "urgent" — apologize, ask what to do.
    ApologizeForDelay,
    /// Anything else.
    AskForGuidance,
}

impl ReplyRule {
    /// All rules, highest priority first.
    pub const PRIORITY: [ReplyRule; 4] = [
        Self::AskPaymentDetails,
        Self::ConfusedByLink,
        Self::ApologizeForDelay,
        Self::AskForGuidance,
    ];

    /// Lowercase substrings that trigger this rule. Empty for the fallback.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::AskPaymentDetails => &["payment", "upi"],
            Self::ConfusedByLink => &["link", "verify"],
            Self::ApologizeForDelay => &["urgent"],
            Self::AskForGuidance => &[],
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Self::AskPaymentDetails => {
                "Okay, I can try sending it. Can you confirm the exact UPI ID or account number?"
            }
            Self::ConfusedByLink => {
                "I’m not very good with links 😅 Can you resend it or explain what I should see?"
            }
            Self::ApologizeForDelay => "Sorry, I was away. What exactly do I need to do now?",
            Self::AskForGuidance => "I want to fix this properly. Can you guide me step by step?",
        }
    }

    /// Pick the rule for a single message.
    pub fn for_message(message: &str) -> ReplyRule {
        let last = message.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|rule| rule.triggers().iter().any(|t| last.contains(t)))
            .unwrap_or(Self::AskForGuidance)
    }
}

impl std::fmt::Display for ReplyRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::AskPaymentDetails => "ask_payment_details",
            Self::ConfusedByLink => "confused_by_link",
            Self::ApologizeForDelay => "apologize_for_delay",
            Self::AskForGuidance => "ask_for_guidance",
        };
        write!(f, "{s}")
    }
}

/// Select the rule for a conversation. Only the last message is inspected.
pub fn select_rule<S: AsRef<str>>(history: &[S]) -> ReplyRule {
    history
        .last()
        .map(|m| ReplyRule::for_message(m.as_ref()))
        .unwrap_or(ReplyRule::AskForGuidance)
}

/// Select the reply text for a conversation.
pub fn select_reply<S: AsRef<str>>(history: &[S]) -> &'static str {
    select_rule(history).reply()
}
