//! Transport seam between the HTTP client and the outside world.
//!
//! Two implementations exist: `NetworkTransport` resolves logical paths
//! against the configured API base, and `LocalTransport` serves GET requests
//! from static JSON fixtures when no API base is configured (offline mode).
//! Tests provide their own scripted implementation of the trait.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::ClientError;

/// HTTP method subset the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A logical API request, before base-URL resolution.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Logical path, e.g. `projectCatalog` or `batch/jobs`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<JsonValue>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: JsonValue) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A raw response from a transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    /// Header names lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Executes logical requests against some backing store.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Joins an API base and a logical path.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Network transport over reqwest.
///
/// The cookie store carries the HttpOnly refresh-token cookie between
/// requests, matching the browser's `credentials: include` behavior.
pub struct NetworkTransport {
    client: reqwest::Client,
    base: String,
}

impl NetworkTransport {
    pub fn new(base: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = join_url(&self.base, &request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

/// Offline transport backed by static JSON fixtures.
///
/// GET maps `batch/jobs` onto `<root>/mock/batch/jobs.json`. POST has no
/// backend to accept writes and fails fast; callers are required to have a
/// non-network fallback for every write operation in this mode.
pub struct LocalTransport {
    root: PathBuf,
}

impl LocalTransport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn fixture_path(&self, path: &str) -> PathBuf {
        self.root
            .join("mock")
            .join(format!("{}.json", path.trim_matches('/')))
    }
}

#[async_trait]
impl Transport for LocalTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        match request.method {
            Method::Get => {
                let path = self.fixture_path(&request.path);
                match tokio::fs::read(&path).await {
                    Ok(body) => Ok(ApiResponse {
                        status: 200,
                        headers: HashMap::new(),
                        body,
                    }),
                    Err(err) => {
                        tracing::debug!("fixture miss for {}: {}", path.display(), err);
                        Err(ClientError::status(
                            404,
                            format!("fixture not found: {}", path.display()),
                        ))
                    }
                }
            }
            Method::Post => Err(ClientError::OfflineWrite { path: request.path }),
        }
    }
}
