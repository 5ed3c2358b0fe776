use thiserror::Error;

/// Errors surfaced by the classification client and the submit pipeline.
///
/// Only the Display strings reach the user; underlying causes stay in the
/// console and tracing output.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The raw input did not parse as JSON.
    #[error("Invalid JSON format: {message}")]
    MalformedInput { message: String },
    /// Non-success HTTP status, or the transport itself failed. The status
    /// code is kept for logging and never shown to the user.
    #[error("API request failed")]
    RequestFailed { status: Option<u16> },
    /// The endpoint answered 2xx with a body that does not match the
    /// expected response shape.
    #[error("API request failed")]
    InvalidResponse { message: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_surfaces_the_parser_message() {
        let err = ClientError::MalformedInput {
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid JSON format: expected value at line 1 column 1"
        );
    }

    #[test]
    fn request_failures_surface_one_generic_message() {
        // The user sees the same string whatever the underlying cause.
        let statuses = [
            ClientError::RequestFailed { status: Some(500) },
            ClientError::RequestFailed { status: None },
            ClientError::InvalidResponse {
                message: "EOF while parsing a value".to_string(),
            },
        ];
        for err in statuses {
            assert_eq!(err.to_string(), "API request failed");
        }
    }
}
