//! Bearer token claim decoding
//!
//! Tokens are JWTs. Only the payload segment is read; the signature is the
//! server's business and is never checked here.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a token cannot be turned into claims
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {0}")]
    Segments(usize),

    #[error("payload is not valid base64url: {0}")]
    Base64(String),

    #[error("payload is not a JSON claims object: {0}")]
    Json(String),

    #[error("expiry {0} is out of range")]
    Expiry(i64),
}

/// Claims carried in a token payload.
///
/// Extraction is lenient: a claim of an unexpected type is treated as absent
/// instead of failing the whole token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    /// Subject identifier, stringified when the issuer sends a number
    pub sub: Option<String>,

    /// Explicit role claim, possibly `ROLE_` prefixed
    pub role: Option<String>,

    /// First `authorities` entry, bare or `{ "authority": .. }`
    pub authority: Option<String>,

    /// First `roles` entry
    pub first_role: Option<String>,

    /// Expiry in whole seconds since the Unix epoch
    pub exp: Option<i64>,
}

fn string_claim(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn scalar_claim(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Name held by the first entry of a list claim
fn first_entry(value: Option<&Value>) -> Option<String> {
    match value?.as_array()?.first()? {
        Value::String(name) => Some(name.clone()),
        Value::Object(entry) => string_claim(entry.get("authority")),
        _ => None,
    }
}

/// NumericDate may carry a fraction; whole seconds are enough here
fn numeric_date(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64))
}

impl Claims {
    /// Pull the claims this client cares about out of a payload object
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            sub: scalar_claim(fields.get("sub")),
            role: string_claim(fields.get("role")),
            authority: first_entry(fields.get("authorities")),
            first_role: first_entry(fields.get("roles")),
            exp: numeric_date(fields.get("exp")),
        }
    }

    /// Raw role name, before normalization.
    ///
    /// Preference order: the `role` claim, then the first `authorities`
    /// entry, then the first `roles` entry. Empty names are skipped.
    pub fn raw_role(&self) -> Option<&str> {
        let non_empty = |s: &&str| !s.is_empty();

        self.role
            .as_deref()
            .filter(non_empty)
            .or_else(|| self.authority.as_deref().filter(non_empty))
            .or_else(|| self.first_role.as_deref().filter(non_empty))
    }

    /// Expiry as an instant
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>, DecodeError> {
        match self.exp {
            None => Ok(None),
            Some(exp) => DateTime::from_timestamp(exp, 0)
                .map(Some)
                .ok_or(DecodeError::Expiry(exp)),
        }
    }
}

/// Decode a JWT's payload segment into claims without verifying it
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::Segments(parts.len()));
    }

    // Some issuers keep the base64 padding, tolerate it
    let payload = parts[1].trim_end_matches('=');
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    let fields: Map<String, Value> =
        serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))?;
    let claims = Claims::from_fields(&fields);

    // Reject an unrepresentable expiry here rather than later
    claims.expires_at()?;

    Ok(claims)
}
