//! Honeypot agent — picks the stalling reply sent back to a suspected scammer.

pub mod persona;

pub use persona::{ReplyRule, select_reply, select_rule};
