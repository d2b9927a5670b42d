//! Authentication models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response fields that may hold the bearer token, in order of preference.
///
/// The first field holding a non-empty string wins.
pub const TOKEN_FIELDS: [&str; 2] = ["token", "accessToken"];

/// Login form submission
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account creation request for either registration endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of a successful login.
///
/// Kept as a raw JSON object because the backend is not consistent about
/// which field carries the token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthResponse {
    fields: Map<String, Value>,
}

impl AuthResponse {
    fn string_field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The bearer token, checked in [`TOKEN_FIELDS`] order
    pub fn bearer_token(&self) -> Option<&str> {
        TOKEN_FIELDS
            .iter()
            .find_map(|field| self.string_field(field))
    }
}
