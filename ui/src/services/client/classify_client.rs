use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::{ClassifyRequest, ClassifyResponse};
use crate::services::config::ClassifyConfig;

/// Client for the remote classification endpoint.
#[derive(Clone)]
pub struct ClassifyClient {
    http_client: Client,
    config: ClassifyConfig,
}

impl ClassifyClient {
    /// Create a client against the fixed default endpoint.
    pub fn new() -> Self {
        Self::with_config(ClassifyConfig::default())
    }

    pub fn with_config(config: ClassifyConfig) -> Self {
        Self {
            http_client: Client::builder()
                .user_agent(config.user_agent.as_str())
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }

    /// POST the request and deserialize the response body.
    ///
    /// A non-success status fails without inspecting the body. No retries,
    /// no timeout; the caller's generation guard handles overlapping calls.
    #[instrument(skip(self), err)]
    pub async fn classify(&self, request: &ClassifyRequest) -> ClientResult<ClassifyResponse> {
        let response = self
            .http_client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Classification request failed to send: {}", e);
                ClientError::RequestFailed { status: None }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Classification endpoint answered {}", status);
            return Err(ClientError::RequestFailed {
                status: Some(status.as_u16()),
            });
        }

        let result = response.json::<ClassifyResponse>().await.map_err(|e| {
            error!("Failed to parse classification response: {}", e);
            ClientError::InvalidResponse {
                message: e.to_string(),
            }
        })?;

        info!("Classification succeeded with status '{}'", result.status);
        Ok(result)
    }
}

impl Default for ClassifyClient {
    fn default() -> Self {
        Self::new()
    }
}
