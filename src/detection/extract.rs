//! Intelligence extraction from a single message.
//!
//! Patterns over-match on purpose: a false positive costs an analyst a
//! glance, a false negative loses the artifact.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Shortest and longest digit runs treated as account numbers.
pub const ACCOUNT_DIGITS_MIN: usize = 9;
pub const ACCOUNT_DIGITS_MAX: usize = 18;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

static PAYMENT_HANDLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.\-]+@\w+\b").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Artifacts pulled from one message, in order of appearance.
///
/// Duplicates are kept and nothing is normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Intelligence {
    pub bank_accounts: Vec<String>,
    pub upi_ids: Vec<String>,
    pub phishing_urls: Vec<String>,
}

/// Maximal digit runs of account-number length.
pub fn bank_accounts(text: &str) -> Vec<String> {
    DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| (ACCOUNT_DIGITS_MIN..=ACCOUNT_DIGITS_MAX).contains(&run.chars().count()))
        .map(String::from)
        .collect()
}

/// `local@domain` shaped handles. The domain needs no dot.
pub fn upi_ids(text: &str) -> Vec<String> {
    PAYMENT_HANDLE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `http(s)://` up to the next whitespace.
pub fn phishing_urls(text: &str) -> Vec<String> {
    URL.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

/// Run every extractor over `text`.
pub fn extract_intelligence(text: &str) -> Intelligence {
    Intelligence {
        bank_accounts: bank_accounts(text),
        upi_ids: upi_ids(text),
        phishing_urls: phishing_urls(text),
    }
}
