//! Authenticated HTTP client.
//!
//! Wraps a transport with base-URL resolution, bearer and CSRF header
//! injection, and the 401 recovery contract: exactly one token refresh and
//! one retry of the original request. Concurrent requests that hit 401
//! while a refresh is already in flight share that refresh's outcome
//! instead of issuing their own.

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use domain::models::auth::RefreshResponse;
use shared::config::RuntimeConfig;
use shared::token::TokenStore;

use crate::error::ClientError;
use crate::http::transport::{
    ApiRequest, ApiResponse, LocalTransport, Method, NetworkTransport, Transport,
};

/// Per-request policy flags.
///
/// Login is fully exempt (no bearer, no CSRF, no refresh); the refresh call
/// itself carries the CSRF header only and must never trigger another
/// refresh.
#[derive(Debug, Clone, Copy)]
pub struct RequestPolicy {
    /// Skip the Authorization header even when a credential is held.
    pub anonymous: bool,
    /// Skip the CSRF double-submit header.
    pub csrf_exempt: bool,
    /// Never attempt a token refresh on 401.
    pub refresh_exempt: bool,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            anonymous: false,
            csrf_exempt: false,
            refresh_exempt: false,
        }
    }
}

impl RequestPolicy {
    /// Policy for `POST /auth/login`.
    pub fn login() -> Self {
        Self {
            anonymous: true,
            csrf_exempt: true,
            refresh_exempt: true,
        }
    }

    /// Policy for `POST /auth/refresh`: CSRF header only, cookie does the rest.
    pub fn refresh() -> Self {
        Self {
            anonymous: true,
            csrf_exempt: false,
            refresh_exempt: true,
        }
    }
}

struct RefreshState {
    /// Bumped once per completed refresh attempt.
    generation: u64,
    /// Outcome of the most recent attempt, shared with coalesced callers.
    last_ok: bool,
}

/// HTTP client shared by every resource service.
pub struct HttpClient {
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
    refresh: Mutex<RefreshState>,
}

impl HttpClient {
    pub fn new(transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self {
            transport,
            tokens,
            refresh: Mutex::new(RefreshState {
                generation: 0,
                last_ok: true,
            }),
        }
    }

    /// Picks the transport from the runtime config: network when an API base
    /// is configured, local fixtures otherwise.
    pub fn from_config(
        config: &RuntimeConfig,
        tokens: TokenStore,
        fixtures_root: &Path,
    ) -> Result<Self, ClientError> {
        let transport: Arc<dyn Transport> = if config.is_local_mode() {
            Arc::new(LocalTransport::new(fixtures_root))
        } else {
            Arc::new(NetworkTransport::new(config.api_base.clone())?)
        };
        Ok(Self::new(transport, tokens))
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// GET a JSON resource with optional query parameters.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let mut request = ApiRequest::get(path);
        for (key, value) in query {
            request = request.with_query(*key, *value);
        }
        let response = self.send(request, RequestPolicy::default()).await?;
        Self::decode(response)
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
        policy: RequestPolicy,
    ) -> Result<T, ClientError> {
        let request = ApiRequest::post(path, serde_json::to_value(body)?);
        let response = self.send(request, policy).await?;
        Self::decode(response)
    }

    /// POST a JSON body and expect an empty (or ignored) response.
    pub async fn post_unit(
        &self,
        path: &str,
        body: &impl Serialize,
        policy: RequestPolicy,
    ) -> Result<(), ClientError> {
        let request = ApiRequest::post(path, serde_json::to_value(body)?);
        self.send(request, policy).await?;
        Ok(())
    }

    /// POST a JSON body and return raw bytes plus the filename from
    /// `Content-Disposition`, when the server provides one.
    pub async fn post_download(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<(Option<String>, Vec<u8>), ClientError> {
        let request = ApiRequest::post(path, serde_json::to_value(body)?);
        let response = self.send(request, RequestPolicy::default()).await?;
        let filename = response
            .header("content-disposition")
            .and_then(parse_content_disposition);
        Ok((filename, response.body))
    }

    /// GET raw bytes (batch archive downloads).
    pub async fn get_bytes(&self, path: &str) -> Result<(Option<String>, Vec<u8>), ClientError> {
        let response = self
            .send(ApiRequest::get(path), RequestPolicy::default())
            .await?;
        let filename = response
            .header("content-disposition")
            .and_then(parse_content_disposition);
        Ok((filename, response.body))
    }

    /// Forces a coalesced token refresh.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let generation = self.refresh.lock().await.generation;
        self.refresh_since(generation).await
    }

    async fn send(
        &self,
        request: ApiRequest,
        policy: RequestPolicy,
    ) -> Result<ApiResponse, ClientError> {
        let generation = self.refresh.lock().await.generation;
        let response = self
            .transport
            .execute(self.decorate(request.clone(), policy))
            .await?;

        if response.status == 401 && !policy.refresh_exempt {
            self.refresh_since(generation).await?;
            let retried = self
                .transport
                .execute(self.decorate(request, policy))
                .await?;
            return Self::check(retried);
        }

        Self::check(response)
    }

    /// Refreshes the access token unless another caller already completed a
    /// refresh after `generation` was observed; coalesced callers share the
    /// stored outcome.
    async fn refresh_since(&self, generation: u64) -> Result<(), ClientError> {
        let mut state = self.refresh.lock().await;
        if state.generation != generation {
            return if state.last_ok {
                Ok(())
            } else {
                Err(ClientError::RefreshFailed)
            };
        }

        let request = ApiRequest::post("auth/refresh", serde_json::json!({}));
        let result = self
            .transport
            .execute(self.decorate(request, RequestPolicy::refresh()))
            .await;

        state.generation += 1;
        match result {
            Ok(response) if response.is_success() => {
                match serde_json::from_slice::<RefreshResponse>(&response.body) {
                    Ok(refreshed) => {
                        self.tokens.set_access(refreshed.access);
                        state.last_ok = true;
                        Ok(())
                    }
                    Err(err) => {
                        tracing::warn!("refresh response decode failed: {}", err);
                        self.fail_refresh(&mut state)
                    }
                }
            }
            Ok(response) => {
                tracing::warn!("token refresh rejected with status {}", response.status);
                self.fail_refresh(&mut state)
            }
            Err(err) => {
                tracing::warn!("token refresh request failed: {}", err);
                self.fail_refresh(&mut state)
            }
        }
    }

    fn fail_refresh(&self, state: &mut RefreshState) -> Result<(), ClientError> {
        self.tokens.clear();
        state.last_ok = false;
        Err(ClientError::RefreshFailed)
    }

    fn decorate(&self, mut request: ApiRequest, policy: RequestPolicy) -> ApiRequest {
        if !policy.anonymous {
            if let Some(access) = self.tokens.access() {
                request = request.with_header("Authorization", format!("Bearer {}", access));
            }
        }
        if request.method == Method::Post && !policy.csrf_exempt {
            if let Some(csrf) = self.tokens.csrf() {
                request = request.with_header("X-CSRF-Token", csrf);
            }
        }
        request
    }

    fn check(response: ApiResponse) -> Result<ApiResponse, ClientError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::status(response.status, response.body_text()))
        }
    }

    fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&response.body)?)
    }
}

/// Extracts the filename from a `Content-Disposition` header value.
fn parse_content_disposition(value: &str) -> Option<String> {
    let marker = "filename=";
    // ASCII lowercasing keeps byte offsets valid in the original value;
    // Unicode lowercasing does not (e.g. U+0130 expands to two chars).
    let idx = value.to_ascii_lowercase().find(marker)?;
    let raw = value[idx + marker.len()..].trim();
    let raw = raw.split(';').next()?.trim();
    let name = raw.trim_matches('"').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
