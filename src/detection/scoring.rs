//! Keyword + URL scam scoring.
//!
//! The score is computed over a conversation's joined history, so it only
//! ever grows as more messages arrive: a flagged conversation stays flagged.

use std::sync::LazyLock;

use regex::Regex;

/// Terms that suggest scam intent. Matched as case-insensitive substrings.
pub const SCAM_KEYWORDS: [&str; 9] = [
    "urgent",
    "verify",
    "account blocked",
    "otp",
    "payment",
    "upi",
    "bank",
    "click",
    "refund",
];

/// Distinct keywords needed to flag a conversation without a URL.
pub const KEYWORD_THRESHOLD: usize = 2;

static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

/// Why a piece of text was (or wasn't) flagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScamScore {
    /// Distinct keywords present, in `SCAM_KEYWORDS` order.
    pub matched_keywords: Vec<&'static str>,
    /// Whether an `http://` or `https://` scheme appears anywhere.
    pub url_present: bool,
}

impl ScamScore {
    /// Number of distinct keywords present.
    pub fn keyword_score(&self) -> usize {
        self.matched_keywords.len()
    }

    pub fn is_scam(&self) -> bool {
        self.keyword_score() >= KEYWORD_THRESHOLD || self.url_present
    }
}

/// Score a text blob.
pub fn score(text: &str) -> ScamScore {
    let lowered = text.to_lowercase();
    let matched_keywords = SCAM_KEYWORDS
        .iter()
        .copied()
        .filter(|k| lowered.contains(k))
        .collect();

    ScamScore {
        matched_keywords,
        url_present: URL_SCHEME.is_match(text),
    }
}

/// Join a conversation's history the way it is scored: single spaces, in order.
pub fn join_history<S: AsRef<str>>(history: &[S]) -> String {
    history
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a conversation's full history.
pub fn score_history<S: AsRef<str>>(history: &[S]) -> ScamScore {
    score(&join_history(history))
}

/// Shorthand for `score(text).is_scam()`.
pub fn detect_scam(text: &str) -> bool {
    score(text).is_scam()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keyword_is_not_enough() {
        let s = score("This is urgent, call me back");
        assert_eq!(s.keyword_score(), 1);
        assert!(!s.url_present);
        assert!(!s.is_scam());
    }

    #[test]
    fn two_distinct_keywords_flag() {
        let s = score("Urgent: your BANK needs you");
        assert_eq!(s.matched_keywords, vec!["urgent", "bank"]);
        assert!(s.is_scam());
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let s = score("urgent urgent URGENT");
        assert_eq!(s.keyword_score(), 1);
        assert!(!s.is_scam());
    }

    #[test]
    fn url_alone_flags() {
        assert!(detect_scam("hello see https://example.com"));
        assert!(detect_scam("plain http://x"));
    }

    #[test]
    fn url_scheme_is_case_sensitive() {
        let s = score("visit HTTPS://EXAMPLE.COM");
        assert!(!s.url_present);
    }

    #[test]
    fn substring_not_word_match() {
        // "bankrupt" contains "bank", "clicked" contains "click"
        let s = score("I went bankrupt after I clicked");
        assert_eq!(s.matched_keywords, vec!["bank", "click"]);
        assert!(s.is_scam());
    }

    #[test]
    fn multi_word_keyword() {
        let s = score("Your Account Blocked today");
        assert_eq!(s.matched_keywords, vec!["account blocked"]);
    }

    #[test]
    fn keywords_can_span_joined_messages() {
        // Each message alone has one keyword; together they have two.
        let history = ["please verify", "your otp"];
        assert!(!detect_scam(history[0]));
        assert!(!detect_scam(history[1]));
        assert!(score_history(&history).is_scam());
    }

    #[test]
    fn join_uses_single_spaces() {
        assert_eq!(join_history(&["a", "b", "c"]), "a b c");
        assert_eq!(join_history::<&str>(&[]), "");
    }

    #[test]
    fn score_is_monotonic_under_append() {
        let base = "hi there, urgent matter";
        let extended = format!("{base} please share the otp");
        let before = score(base);
        let after = score(&extended);
        assert!(after.keyword_score() >= before.keyword_score());
        assert!(!before.is_scam());
        assert!(after.is_scam());

        let more = format!("{extended} thanks");
        assert!(score(&more).is_scam());
    }

    #[test]
    fn empty_text_scores_zero() {
        let s = score("");
        assert_eq!(s, ScamScore::default());
        assert!(!s.is_scam());
    }
}
