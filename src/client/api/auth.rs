//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::Result;

/// Authentication operations for the Recruit API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse>;

    /// Create a candidate account
    async fn register_candidate(&self, request: &RegisterRequest) -> Result<()>;

    /// Create a recruiter account
    async fn register_recruiter(&self, request: &RegisterRequest) -> Result<()>;
}
