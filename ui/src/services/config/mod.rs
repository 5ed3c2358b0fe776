//! Configuration for the classification client.

use serde::{Deserialize, Serialize};

/// Fixed classification endpoint. The app has no other configuration
/// surface; there is no environment or file loading.
pub const DEFAULT_ENDPOINT: &str = "https://api-test-ten-zeta.vercel.app/api/process";

const USER_AGENT: &str = "json-classifier-form/1.0";

/// Settings consumed by `ClassifyClient`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// URL the submit pipeline POSTs to.
    pub endpoint: String,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}
