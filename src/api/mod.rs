//! HTTP surface: routing, shared-secret check, JSON in and out.

pub mod routes;

pub use routes::{API_KEY_HEADER, AppState, honeypot_routes};
