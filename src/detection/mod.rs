//! Pattern-based scam detection and intelligence extraction.
//!
//! Both halves are pure functions over text:
//! - `scoring` decides whether a conversation looks like a scam, using the
//!   full joined history.
//! - `extract` pulls account numbers, payment handles and URLs out of the
//!   latest message only.

pub mod extract;
pub mod scoring;

pub use extract::{Intelligence, extract_intelligence};
pub use scoring::{SCAM_KEYWORDS, ScamScore, detect_scam, score, score_history};
