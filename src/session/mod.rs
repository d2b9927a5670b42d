//! Session state: the single owner of the current identity
//!
//! The session derives an [`Identity`] from the stored credential at startup
//! and after every login or logout, and publishes it to subscribers. It is
//! the only writer of both the credential store and the published identity;
//! guards, the interceptor and views only read through its accessors.
//!
//! Expiry is checked lazily: [`Session::is_authenticated`] tears the session
//! down when it finds the identity expired. Nothing runs in the background.

pub mod clock;
pub mod credential;
pub mod identity;
pub mod token;

use std::sync::Arc;

use tokio::sync::watch;

use crate::client::AuthApi;
use crate::client::models::LoginRequest;
use crate::error::{Error, LOGIN_FAILURE_FALLBACK, Result, SessionError};
use crate::routing::{LOGIN_PATH, Navigator};

pub use clock::{Clock, SystemClock};
pub use credential::{CredentialStore, LocalCredentialStore};
pub use identity::{Identity, Role};

/// Process-wide session slot
pub struct Session {
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    current: watch::Sender<Option<Identity>>,
}

impl Session {
    /// Create a session and restore any stored credential
    pub fn new(
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let (current, _) = watch::channel(None);
        let session = Self {
            store,
            navigator,
            clock,
            current,
        };
        session.restore();
        session
    }

    /// Re-derive the identity from the credential store and publish it.
    ///
    /// A credential that cannot be decoded, or is already expired, is purged
    /// and the session ends up empty. Never fails.
    pub fn restore(&self) -> Option<Identity> {
        let identity = match self.store.load() {
            Ok(Some(token)) => match self.identity_from(&token) {
                Ok(identity) => Some(identity),
                Err(err) => {
                    log::warn!("Discarding stored credential: {}", err);
                    self.clear_store();
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to read stored credential: {}", err);
                None
            }
        };

        if let Some(ref identity) = identity {
            log::debug!(
                "Restored session for {} with role {}",
                identity.subject.as_deref().unwrap_or("<unknown>"),
                identity
                    .role
                    .as_ref()
                    .map(Role::as_str)
                    .unwrap_or("<none>")
            );
        }

        self.publish(identity.clone());
        identity
    }

    fn identity_from(&self, token: &str) -> std::result::Result<Identity, SessionError> {
        let claims = token::decode(token)?;
        let identity = Identity::from_claims(token, &claims)?;
        if identity.is_expired_at(self.clock.now()) {
            return Err(SessionError::ExpiredToken);
        }
        Ok(identity)
    }

    /// Submit credentials and establish a session from the returned token.
    ///
    /// The identity is published before this returns, so anything evaluated
    /// after a successful login observes it. A failed submission never tears
    /// down an existing session.
    pub async fn login(&self, api: &dyn AuthApi, credentials: &LoginRequest) -> Result<Identity> {
        log::debug!("Submitting login for {}", credentials.email);

        let response = api.login(credentials).await.map_err(login_failure)?;

        let token = response.bearer_token().ok_or(SessionError::MissingToken)?;
        self.store.save(token)?;

        match self.identity_from(token) {
            Ok(identity) => {
                log::info!("Logged in with role {:?}", identity.role);
                self.publish(Some(identity.clone()));
                Ok(identity)
            }
            Err(err) => {
                log::warn!("Login returned an unusable token: {}", err);
                self.clear_store();
                self.publish(None);
                Err(err.into())
            }
        }
    }

    /// Clear the credential, publish the empty session and go to the login
    /// entry point. Safe to call when already logged out.
    pub fn logout(&self) {
        self.clear_store();
        self.publish(None);
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Current published identity
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    /// Canonical role of the current identity
    pub fn current_role(&self) -> Option<Role> {
        self.current.borrow().as_ref().and_then(|id| id.role.clone())
    }

    /// Whether a non-expired identity is present.
    ///
    /// Finding the identity expired logs the user out before returning
    /// `false`.
    pub fn is_authenticated(&self) -> bool {
        let expired = match self.current.borrow().as_ref() {
            None => return false,
            Some(identity) => identity.is_expired_at(self.clock.now()),
        };

        if expired {
            log::info!("Session expired, logging out");
            self.logout();
            return false;
        }
        true
    }

    /// Observe identity changes
    #[allow(dead_code)]
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }

    fn publish(&self, identity: Option<Identity>) {
        self.current.send_replace(identity);
    }

    fn clear_store(&self) {
        if let Err(err) = self.store.clear() {
            log::warn!("Failed to clear stored credential: {}", err);
        }
    }
}

/// Turn a failed login submission into a user-facing message
fn login_failure(err: Error) -> Error {
    match err {
        Error::Api(api_err) => {
            let message = api_err
                .server_message()
                .unwrap_or(LOGIN_FAILURE_FALLBACK)
                .to_string();
            SessionError::LoginFailed(message).into()
        }
        other => other,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::Harness;
    use super::token::test_support::make_token;
    use super::*;
    use crate::client::MockRecruitClient;
    use crate::error::ApiError;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn token_expiring_in(role: &str, secs: i64) -> String {
        make_token(&json!({
            "sub": "user@example.com",
            "role": role,
            "exp": now().timestamp() + secs,
        }))
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "user@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_restore_valid_token() {
        let token = token_expiring_in("ROLE_RECRUITER", 3600);
        let h = Harness::new(Some(&token), now(), "/");

        let identity = h.session.current_identity().unwrap();
        assert_eq!(identity.role, Some(Role::Recruiter));
        assert_eq!(identity.token, token);
        assert!(h.session.is_authenticated());
        assert_eq!(h.session.current_role(), Some(Role::Recruiter));
    }

    #[test]
    fn test_restore_without_token() {
        let h = Harness::new(None, now(), "/");
        assert!(h.session.current_identity().is_none());
        assert!(h.session.current_role().is_none());
        assert!(!h.session.is_authenticated());
    }

    #[test]
    fn test_undecodable_tokens_are_purged() {
        let bad_tokens = [
            "abc".to_string(),
            "a.b".to_string(),
            "x.%%%.y".to_string(),
            format!("h.{}.s", "bm90IGpzb24"),
        ];

        for token in bad_tokens {
            let h = Harness::new(Some(&token), now(), "/");
            assert!(!h.session.is_authenticated(), "token {:?}", token);
            assert!(h.session.current_identity().is_none());
            assert!(h.store.load().unwrap().is_none(), "token {:?}", token);
        }
    }

    #[test]
    fn test_oddly_typed_claims_keep_session() {
        let exp = now().timestamp() + 3600;
        let cases = [
            (json!({ "sub": 42, "role": "CANDIDATE", "exp": exp }), Some(Role::Candidate)),
            (json!({ "role": "CANDIDATE", "exp": exp as f64 + 0.5 }), Some(Role::Candidate)),
            (
                json!({ "role": "RECRUITER", "roles": "RECRUITER", "exp": exp }),
                Some(Role::Recruiter),
            ),
            (json!({ "role": 42, "exp": exp }), None),
        ];

        for (payload, role) in cases {
            let token = make_token(&payload);
            let h = Harness::new(Some(&token), now(), "/");
            assert!(h.session.is_authenticated(), "payload {}", payload);
            assert_eq!(h.session.current_role(), role, "payload {}", payload);
            assert_eq!(h.store.load().unwrap().as_deref(), Some(token.as_str()));
        }
    }

    #[test]
    fn test_restore_failure_does_not_navigate() {
        let h = Harness::new(Some("garbage"), now(), "/candidate/offers");
        assert_eq!(h.location.current_path(), "/candidate/offers");
    }

    #[test]
    fn test_stored_token_expired_one_second_ago() {
        let token = token_expiring_in("CANDIDATE", -1);
        let h = Harness::new(Some(&token), now(), "/");

        assert!(!h.session.is_authenticated());
        assert!(h.store.load().unwrap().is_none());
        assert!(h.session.current_identity().is_none());
    }

    #[test]
    fn test_expiry_detected_lazily() {
        let token = token_expiring_in("CANDIDATE", 60);
        let h = Harness::new(Some(&token), now(), "/candidate/dashboard");
        let mut rx = h.session.subscribe();
        assert!(h.session.is_authenticated());

        // Passing the expiry alone changes nothing until someone asks
        h.clock.advance(chrono::Duration::seconds(61));
        assert!(h.session.current_identity().is_some());
        assert!(!rx.has_changed().unwrap());

        assert!(!h.session.is_authenticated());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
        assert!(h.store.load().unwrap().is_none());
        assert_eq!(h.location.current_path(), LOGIN_PATH);
    }

    #[test]
    fn test_expiry_instant_itself_is_expired() {
        let token = token_expiring_in("CANDIDATE", 60);
        let h = Harness::new(Some(&token), now(), "/");

        h.clock.advance(chrono::Duration::seconds(60));
        assert!(!h.session.is_authenticated());
    }

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = make_token(&json!({ "role": "CANDIDATE" }));
        let h = Harness::new(Some(&token), now(), "/");

        h.clock.advance(chrono::Duration::days(3650));
        assert!(h.session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_and_navigates() {
        let token = token_expiring_in("RECRUITER", 3600);
        let h = Harness::new(Some(&token), now(), "/recruiter/dashboard");

        h.session.logout();

        assert!(h.session.current_identity().is_none());
        assert!(h.store.load().unwrap().is_none());
        assert_eq!(h.location.current_path(), LOGIN_PATH);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let h = Harness::new(None, now(), "/");
        let mut rx = h.session.subscribe();

        h.session.logout();
        h.session.logout();

        assert!(h.session.current_identity().is_none());
        assert!(rx.borrow_and_update().is_none());
        assert_eq!(h.location.history(), vec!["/", LOGIN_PATH, LOGIN_PATH]);
    }

    #[tokio::test]
    async fn test_login_with_access_token_field() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let token = token_expiring_in("ROLE_CANDIDATE", 3600);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "accessToken": token, "role": "ROLE_CANDIDATE" }))
            .await;
        let mut rx = h.session.subscribe();

        let identity = h.session.login(&api, &credentials()).await.unwrap();

        assert_eq!(identity.role, Some(Role::Candidate));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().as_ref().and_then(|i| i.role.clone()),
            Some(Role::Candidate)
        );
        assert_eq!(h.store.load().unwrap(), Some(token));
        assert!(h.session.is_authenticated());
        assert_eq!(api.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_login_prefers_token_field() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let preferred = token_expiring_in("RECRUITER", 3600);
        let other = token_expiring_in("CANDIDATE", 3600);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "token": preferred, "accessToken": other }))
            .await;

        let identity = h.session.login(&api, &credentials()).await.unwrap();

        assert_eq!(identity.role, Some(Role::Recruiter));
        assert_eq!(h.store.load().unwrap(), Some(preferred));
    }

    #[tokio::test]
    async fn test_login_without_token_field_fails() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "email": "user@example.com", "role": "CANDIDATE" }))
            .await;

        let err = h.session.login(&api, &credentials()).await.unwrap_err();

        assert!(matches!(err, Error::Session(SessionError::MissingToken)));
        assert!(h.session.current_identity().is_none());
        assert!(h.store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_with_undecodable_token_purges() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "accessToken": "abc" }))
            .await;

        let err = h.session.login(&api, &credentials()).await.unwrap_err();

        assert!(matches!(err, Error::Session(SessionError::InvalidToken(_))));
        assert!(h.session.current_identity().is_none());
        assert!(h.store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_uses_server_message() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_error(ApiError::BadRequest(Some("Invalid credentials".to_string())))
            .await;

        let err = h.session.login(&api, &credentials()).await.unwrap_err();

        match err {
            Error::Session(SessionError::LoginFailed(msg)) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("Expected LoginFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_failure_fallback_message() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_error(ApiError::Network("Failed to connect to API".to_string()))
            .await;

        let err = h.session.login(&api, &credentials()).await.unwrap_err();

        match err {
            Error::Session(SessionError::LoginFailed(msg)) => {
                assert_eq!(msg, LOGIN_FAILURE_FALLBACK)
            }
            other => panic!("Expected LoginFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let token = token_expiring_in("RECRUITER", 3600);
        let h = Harness::new(Some(&token), now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_error(ApiError::Unauthorized(None))
            .await;

        assert!(h.session.login(&api, &credentials()).await.is_err());

        assert_eq!(h.session.current_role(), Some(Role::Recruiter));
        assert_eq!(h.store.load().unwrap(), Some(token));
        assert_eq!(h.location.history(), vec![LOGIN_PATH]);
    }

    #[tokio::test]
    async fn test_login_with_expired_token_is_rejected() {
        let h = Harness::new(None, now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "token": token_expiring_in("CANDIDATE", -10) }))
            .await;

        let err = h.session.login(&api, &credentials()).await.unwrap_err();

        assert!(matches!(err, Error::Session(SessionError::ExpiredToken)));
        assert!(h.store.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_relogin_replaces_identity() {
        let h = Harness::new(Some(&token_expiring_in("CANDIDATE", 3600)), now(), LOGIN_PATH);
        let api = MockRecruitClient::new()
            .with_login_response(json!({ "token": token_expiring_in("ROLE_RECRUITER", 3600) }))
            .await;

        h.session.login(&api, &credentials()).await.unwrap();

        assert_eq!(h.session.current_role(), Some(Role::Recruiter));
    }
}
