//! Scam honeypot — flags scam conversations, pulls out payment intel, and
//! keeps the scammer talking.

pub mod agent;
pub mod api;
pub mod config;
pub mod detection;
pub mod error;
pub mod session;
pub mod store;
