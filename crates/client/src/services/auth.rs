//! Authentication service.
//!
//! Owns the login/logout lifecycle: the access token goes into the in-memory
//! token store, the CSRF token is captured when the backend issues one
//! in-band, and the profile is cached in session storage so a reload within
//! the session restores the signed-in state. Logout is best-effort on the
//! wire but always clears local state.

use std::sync::Arc;

use validator::Validate;

use domain::models::auth::{LoginRequest, LoginResponse, UserProfile};
use shared::session::{SessionStore, PROFILE_KEY};
use shared::token::TokenStore;

use crate::error::ClientError;
use crate::http::{HttpClient, RequestPolicy};

pub struct AuthService {
    http: Arc<HttpClient>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>, session: Arc<dyn SessionStore>) -> Self {
        Self { http, session }
    }

    fn tokens(&self) -> &TokenStore {
        self.http.tokens()
    }

    /// Logs in and returns the authenticated profile.
    ///
    /// Login failures are never masked by fallback data; a 401 here means
    /// bad credentials and reaches the caller as a status error.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response: LoginResponse = self
            .http
            .post_json("auth/login", &request, RequestPolicy::login())
            .await?;

        self.tokens().set_access(response.access);
        if let Some(xsrf) = response.xsrf_token {
            self.tokens().set_csrf(xsrf);
        }
        match serde_json::to_string(&response.profile) {
            Ok(cached) => self.session.put(PROFILE_KEY, cached),
            Err(err) => tracing::warn!("profile cache serialization failed: {}", err),
        }
        Ok(response.profile)
    }

    /// Logs out.
    ///
    /// The server call is best-effort; local credentials and the cached
    /// profile are cleared regardless of what the wire says.
    pub async fn logout(&self) {
        if let Err(err) = self
            .http
            .post_unit("auth/logout", &serde_json::json!({}), RequestPolicy::default())
            .await
        {
            tracing::warn!("logout request failed, clearing local state anyway: {}", err);
        }
        self.tokens().clear();
        self.session.remove(PROFILE_KEY);
    }

    /// Restores the profile cached by a previous login in this session.
    ///
    /// A corrupt cache entry is dropped rather than surfaced; the caller
    /// just sees an unauthenticated state.
    pub fn restore_session(&self) -> Option<UserProfile> {
        let cached = self.session.get(PROFILE_KEY)?;
        match serde_json::from_str(&cached) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!("cached profile unreadable, discarding: {}", err);
                self.session.remove(PROFILE_KEY);
                None
            }
        }
    }

    /// Forces a token refresh, sharing any refresh already in flight.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        self.http.refresh().await
    }
}
