//! Mock Recruit API client for testing
//!
//! Implements the API traits against in-memory fixtures so session,
//! interceptor and command logic can be tested without a gateway.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, OfferApi};
use super::models::{Application, AuthResponse, LoginRequest, Offer, RegisterRequest};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockRecruitClient::new()
///     .with_login_response(json!({ "token": token }))
///     .await;
///
/// session.login(&mock, &credentials).await?;
/// assert_eq!(mock.call_counts().await.login, 1);
/// ```
#[derive(Default)]
pub struct MockRecruitClient {
    /// Body returned from login
    login_response: Arc<Mutex<Value>>,
    /// Offers returned from list_offers and my_offers
    offers: Arc<Mutex<Vec<Offer>>>,
    /// Applications returned from my_applications
    applications: Arc<Mutex<Vec<Application>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register_candidate: usize,
    pub register_recruiter: usize,
    pub list_offers: usize,
    pub my_applications: usize,
    pub my_offers: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register_candidate
            + self.register_recruiter
            + self.list_offers
            + self.my_applications
            + self.my_offers
    }
}

impl MockRecruitClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the raw body returned from login.
    pub async fn with_login_response(self, body: Value) -> Self {
        *self.login_response.lock().await = body;
        self
    }

    /// Configure offers to return from the offer listings.
    pub async fn with_offers(self, offers: Vec<Offer>) -> Self {
        *self.offers.lock().await = offers;
        self
    }

    /// Configure applications to return from my_applications.
    pub async fn with_applications(self, applications: Vec<Application>) -> Self {
        *self.applications.lock().await = applications;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockRecruitClient {
    async fn login(&self, _credentials: &LoginRequest) -> Result<AuthResponse> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        let body = self.login_response.lock().await.clone();
        Ok(serde_json::from_value(body).unwrap_or_default())
    }

    async fn register_candidate(&self, _request: &RegisterRequest) -> Result<()> {
        self.call_count.lock().await.register_candidate += 1;
        self.check_error().await
    }

    async fn register_recruiter(&self, _request: &RegisterRequest) -> Result<()> {
        self.call_count.lock().await.register_recruiter += 1;
        self.check_error().await
    }
}

#[async_trait]
impl OfferApi for MockRecruitClient {
    async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.call_count.lock().await.list_offers += 1;
        self.check_error().await?;
        Ok(self.offers.lock().await.clone())
    }

    async fn my_applications(&self) -> Result<Vec<Application>> {
        self.call_count.lock().await.my_applications += 1;
        self.check_error().await?;
        Ok(self.applications.lock().await.clone())
    }

    async fn my_offers(&self) -> Result<Vec<Offer>> {
        self.call_count.lock().await.my_offers += 1;
        self.check_error().await?;
        Ok(self.offers.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[tokio::test]
    async fn test_error_consumed_once() {
        let mock = MockRecruitClient::new()
            .with_error(ApiError::Forbidden(None))
            .await;

        assert!(matches!(
            mock.list_offers().await,
            Err(Error::Api(ApiError::Forbidden(None)))
        ));
        assert!(mock.list_offers().await.unwrap().is_empty());
        assert_eq!(mock.call_counts().await.list_offers, 2);
    }

    #[tokio::test]
    async fn test_login_response_passthrough() {
        let mock = MockRecruitClient::new()
            .with_login_response(json!({ "accessToken": "abc" }))
            .await;

        let request = LoginRequest {
            email: "a@b.c".to_string(),
            password: "x".to_string(),
        };
        let response = mock.login(&request).await.unwrap();

        assert_eq!(response.bearer_token(), Some("abc"));
        assert_eq!(mock.call_counts().await.total(), 1);
    }
}
