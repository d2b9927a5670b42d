//! Recruit API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{AuthApi, OfferApi};
use super::models::{Application, AuthResponse, LoginRequest, Offer, RegisterRequest, extract_message};
use crate::error::{ApiError, Result};
use crate::session::CredentialStore;

/// Requests per second allowed towards the gateway
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Recruit API gateway.
///
/// Reads the bearer token from the credential store on every request and
/// never writes to it.
pub struct RecruitClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    credentials: Arc<dyn CredentialStore>,
}

impl RecruitClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8888`)
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            std::num::NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(std::num::NonZeroU32::MIN),
        );

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
            credentials,
        })
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self
            .http
            .request(method, &url)
            .header("Accept", "application/json");

        match self.credentials.load() {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(err) => {
                log::warn!("Could not read stored credential: {}", err);
                builder
            }
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        self.rate_limiter.until_ready().await;

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("{} {}", status, response.url());

        if status.is_success() {
            return Ok(response);
        }
        Err(error_for_status(response).await.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(self.builder(Method::GET, path)).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        self.send(self.builder(Method::POST, path).json(body)).await
    }
}

/// Map a non-success response onto the error taxonomy
async fn error_for_status(response: Response) -> ApiError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60);

    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body);

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit(Duration::from_secs(retry_after)),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}

#[async_trait]
impl AuthApi for RecruitClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        let response = self.post_json("/auth/login", credentials).await?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse login response: {}", e)).into()
        })
    }

    async fn register_candidate(&self, request: &RegisterRequest) -> Result<()> {
        self.post_json("/auth/register-candidate", request).await?;
        Ok(())
    }

    async fn register_recruiter(&self, request: &RegisterRequest) -> Result<()> {
        self.post_json("/auth/register-recruiter", request).await?;
        Ok(())
    }
}

#[async_trait]
impl OfferApi for RecruitClient {
    async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.get_json("/offers").await
    }

    async fn my_applications(&self) -> Result<Vec<Application>> {
        self.get_json("/offers/my-applications").await
    }

    async fn my_offers(&self) -> Result<Vec<Offer>> {
        self.get_json("/offers/my-offers").await
    }
}
