// Client-side functionality for the classification form
//
// This module provides the typed surface for the remote classification
// collaborator: request/response types, error types, and the HTTP client.

pub mod classify_client;
pub mod errors;
pub mod types;

// Re-export core types for easy access
pub use classify_client::ClassifyClient;
pub use errors::{ClientError, ClientResult};
pub use types::{ClassifyRequest, ClassifyResponse};
