//! Submit pipeline: raw text area contents to classification outcome.

use serde_json::Value;

use crate::services::client::{
    ClassifyClient, ClassifyRequest, ClassifyResponse, ClientError, ClientResult,
};

/// Builds the outbound request from the raw text the user typed.
///
/// The payload's `data` member is forwarded without a presence check; when it
/// is missing, the literal string "undefined" goes over the wire. The
/// endpoint's existing callers behave this way, so the request shape is kept
/// bit-compatible with them.
pub fn build_classify_request(raw_input: &str) -> ClientResult<ClassifyRequest> {
    let payload: Value =
        serde_json::from_str(raw_input).map_err(|e| ClientError::MalformedInput {
            message: e.to_string(),
        })?;

    let input_string = match payload.get("data") {
        Some(data) => serde_json::to_string(data).map_err(|e| ClientError::MalformedInput {
            message: e.to_string(),
        })?,
        None => "undefined".to_string(),
    };

    Ok(ClassifyRequest { input_string })
}

/// Runs the full pipeline: parse, extract, one POST, deserialize.
pub async fn classify_raw_input(raw_input: &str) -> ClientResult<ClassifyResponse> {
    let request = build_classify_request(raw_input)?;
    let client = ClassifyClient::new();
    client.classify(&request).await
}
