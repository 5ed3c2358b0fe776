//! Infrastructure Services
//!
//! Core infrastructure for the classifier application:
//!
//! - **client**: typed HTTP client for the classification endpoint
//! - **config**: endpoint and client settings
//!
//! The services are WASM-first, using browser-compatible HTTP without
//! Send/Sync bounds.

pub mod client;
pub mod config;
