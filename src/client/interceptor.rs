//! Failure interceptor for API calls
//!
//! Wraps any [`RecruitApi`] implementation and reacts to authentication and
//! authorization failures in one place. The original error always reaches
//! the caller unchanged.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::models::{Application, AuthResponse, LoginRequest, Offer, RegisterRequest};
use crate::client::{AuthApi, OfferApi, RecruitApi};
use crate::error::{Error, Result};
use crate::routing::{LOGIN_PATH, Navigator};
use crate::session::Session;

/// Intercepting wrapper for any RecruitApi implementation.
///
/// A 401 tears the session down, unless the user is already on the login
/// entry point (a failed login must not redirect to itself). A 403 is only
/// logged; the session stays intact.
pub struct InterceptedClient<C: RecruitApi> {
    inner: C,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl<C: RecruitApi> InterceptedClient<C> {
    pub fn new(inner: C, session: Arc<Session>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner,
            session,
            navigator,
        }
    }

    /// Get the inner client
    #[allow(dead_code)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn intercept<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(Error::Api(ref err)) = result {
            if err.is_authentication_failure() {
                let path = self.navigator.current_path();
                if path.contains(LOGIN_PATH) {
                    log::debug!("Authentication failure on {}, leaving session as is", path);
                } else {
                    log::warn!("Authentication failure ({}), signing out", err);
                    self.session.logout();
                }
            } else if err.is_authorization_failure() {
                log::error!("Access forbidden: {}", err);
            }
        }
        result
    }
}

#[async_trait]
impl<C: RecruitApi> AuthApi for InterceptedClient<C> {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        self.intercept(self.inner.login(credentials).await)
    }

    async fn register_candidate(&self, request: &RegisterRequest) -> Result<()> {
        self.intercept(self.inner.register_candidate(request).await)
    }

    async fn register_recruiter(&self, request: &RegisterRequest) -> Result<()> {
        self.intercept(self.inner.register_recruiter(request).await)
    }
}

#[async_trait]
impl<C: RecruitApi> OfferApi for InterceptedClient<C> {
    async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.intercept(self.inner.list_offers().await)
    }

    async fn my_applications(&self) -> Result<Vec<Application>> {
        self.intercept(self.inner.my_applications().await)
    }

    async fn my_offers(&self) -> Result<Vec<Offer>> {
        self.intercept(self.inner.my_offers().await)
    }
}
