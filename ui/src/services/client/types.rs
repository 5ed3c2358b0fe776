use serde::{Deserialize, Serialize};

/// Request body for the classification endpoint.
///
/// `input_string` carries a JSON-serialized array, not a JSON value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassifyRequest {
    pub input_string: String,
}

/// Response body of the classification endpoint. Received opaquely; nothing
/// beyond the shape is validated locally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassifyResponse {
    pub status: String,
    pub numbers_array: Vec<serde_json::Number>,
    pub alphabets_array: Vec<String>,
    pub highest_alphabet_array: Vec<String>,
    pub is_prime_available: bool,
}
