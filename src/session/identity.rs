//! Normalized identity derived from token claims

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::token::{Claims, DecodeError};

/// Prefix some backends put in front of role names
pub const ROLE_PREFIX: &str = "ROLE_";

/// Strip a single leading `ROLE_` prefix.
///
/// Applied exactly once, when claims become an [`Identity`]. A role without
/// the prefix is returned unchanged.
pub fn normalize_role(raw: &str) -> &str {
    raw.strip_prefix(ROLE_PREFIX).unwrap_or(raw)
}

/// Canonical role used for every authorization decision
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Role {
    Candidate,
    Recruiter,
    /// Any other role name, kept verbatim after normalization
    Other(String),
}

impl Role {
    /// Build a role from an already normalized name
    pub fn from_canonical(name: &str) -> Self {
        match name {
            "CANDIDATE" => Role::Candidate,
            "RECRUITER" => Role::Recruiter,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Candidate => "CANDIDATE",
            Role::Recruiter => "RECRUITER",
            Role::Other(name) => name,
        }
    }

    /// Whether this is one of the roles the platform has an area for
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in user as seen by the rest of the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    /// Subject claim (the account email on this platform)
    pub subject: Option<String>,
    /// Canonical role; `None` when the token names no role at all
    pub role: Option<Role>,
    /// Expiry instant, when the token carries one
    pub expires_at: Option<DateTime<Utc>>,
    /// The raw bearer token
    #[serde(skip)]
    pub token: String,
}

impl Identity {
    /// Normalize decoded claims into an identity
    pub fn from_claims(token: &str, claims: &Claims) -> Result<Self, DecodeError> {
        let role = claims
            .raw_role()
            .map(|raw| Role::from_canonical(normalize_role(raw)));

        Ok(Self {
            subject: claims.sub.clone(),
            role,
            expires_at: claims.expires_at()?,
            token: token.to_string(),
        })
    }

    /// Whether the expiry instant is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}
