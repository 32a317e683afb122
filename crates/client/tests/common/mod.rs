//! Common test utilities for integration tests.
//!
//! Provides a scripted transport so service behavior can be exercised
//! without a backend: each path gets a queue of canned responses, every
//! request is recorded, and an unscripted path answers like an unreachable
//! server.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use parkforms_client::error::ClientError;
use parkforms_client::http::{ApiRequest, ApiResponse, HttpClient, Transport};
use shared::token::TokenStore;

pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<ApiResponse>>>,
    calls: Mutex<Vec<ApiRequest>>,
    delay: Option<std::time::Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// A transport that holds every response for `delay`, so tests can put
    /// several requests in flight at once.
    pub fn with_delay(delay: std::time::Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    /// A transport with nothing scripted: every call fails like an outage.
    pub fn failing() -> Self {
        Self::new()
    }

    /// Queues a response for the given path. Responses for the same path are
    /// served in the order they were scripted.
    pub fn script(&self, path: &str, response: ApiResponse) {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let path = request.path.clone();
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .get_mut(&path)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| ClientError::status(502, "upstream unreachable"))
    }
}

pub fn ok_json(body: &str) -> ApiResponse {
    ApiResponse {
        status: 200,
        headers: HashMap::new(),
        body: body.as_bytes().to_vec(),
    }
}

pub fn status(code: u16) -> ApiResponse {
    ApiResponse {
        status: code,
        headers: HashMap::new(),
        body: Vec::new(),
    }
}

/// Client wired to the given transport with a fresh token store.
pub fn client_with(transport: Arc<MockTransport>) -> Arc<HttpClient> {
    Arc::new(HttpClient::new(transport, TokenStore::new()))
}

/// Client whose every request fails, for exercising fallback paths.
pub fn failing_client() -> Arc<HttpClient> {
    client_with(Arc::new(MockTransport::failing()))
}

pub const LOGIN_BODY: &str = r#"{
    "access": "tok-1",
    "xsrfToken": "csrf-1",
    "profile": {
        "id": "U-100",
        "name": "Dana Whitfield",
        "email": "dwhitfield@parks.example",
        "role": "Admin",
        "permissions": {
            "generateForms": true,
            "manageUsers": true,
            "viewAuditLogs": true,
            "runBatchJobs": true
        }
    }
}"#;
