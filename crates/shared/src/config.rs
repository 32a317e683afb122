//! Runtime dashboard configuration.
//!
//! The dashboard ships a small well-known JSON document (`runtime-config.json`)
//! next to its static assets. It is fetched once at startup and never mutated
//! afterwards. Config loading must never prevent startup: any failure (network,
//! non-2xx, parse) installs the built-in default instead of propagating.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Well-known name of the runtime config document.
pub const RUNTIME_CONFIG_RESOURCE: &str = "runtime-config.json";

/// Runtime configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    /// Base URL of the backend API. Empty string selects local/offline mode.
    pub api_base: String,
    /// Whether the router-library navigation mode is enabled.
    pub routing_enabled: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            routing_enabled: false,
        }
    }
}

impl RuntimeConfig {
    /// True when no API base is configured and GET requests should resolve
    /// against local static fixtures.
    pub fn is_local_mode(&self) -> bool {
        self.api_base.trim().is_empty()
    }
}

struct ConfigState {
    value: RuntimeConfig,
    loaded: bool,
}

/// Process-wide handle to the runtime configuration.
///
/// Cloning the handle shares the underlying state. `get` is synchronous and
/// always succeeds: before a `load_*` call completes it returns the default.
#[derive(Clone)]
pub struct ConfigHandle {
    state: Arc<RwLock<ConfigState>>,
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigHandle {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ConfigState {
                value: RuntimeConfig::default(),
                loaded: false,
            })),
        }
    }

    /// Returns the last loaded configuration, or the default before load.
    pub fn get(&self) -> RuntimeConfig {
        self.state
            .read()
            .map(|s| s.value.clone())
            .unwrap_or_default()
    }

    /// Whether a load attempt (successful or defaulted) has completed.
    pub fn is_loaded(&self) -> bool {
        self.state.read().map(|s| s.loaded).unwrap_or(false)
    }

    /// Installs a configuration value directly and marks the handle loaded.
    pub fn install(&self, value: RuntimeConfig) {
        if let Ok(mut state) = self.state.write() {
            state.value = value;
            state.loaded = true;
        }
    }

    /// Parses a JSON document; on parse failure installs the default.
    pub fn load_from_str(&self, raw: &str) {
        match serde_json::from_str::<RuntimeConfig>(raw) {
            Ok(value) => self.install(value),
            Err(err) => {
                tracing::warn!("runtime config parse failed, using defaults: {}", err);
                self.install(RuntimeConfig::default());
            }
        }
    }

    /// Reads the config document from disk; on any failure installs the default.
    pub fn load_from_file(&self, path: &std::path::Path) {
        match std::fs::read_to_string(path) {
            Ok(raw) => self.load_from_str(&raw),
            Err(err) => {
                tracing::warn!(
                    "runtime config read failed ({}), using defaults: {}",
                    path.display(),
                    err
                );
                self.install(RuntimeConfig::default());
            }
        }
    }

    /// Fetches the config document from a URL once.
    ///
    /// Idempotent: a second call after the first completes does not refetch.
    /// Any failure installs the default; this never returns an error.
    pub async fn load_from_url(&self, url: &str) {
        if self.is_loaded() {
            return;
        }

        let fetched = async {
            let response = reqwest::get(url).await.ok()?;
            if !response.status().is_success() {
                tracing::warn!("runtime config fetch returned {}", response.status());
                return None;
            }
            response.text().await.ok()
        }
        .await;

        match fetched {
            Some(raw) => self.load_from_str(&raw),
            None => {
                tracing::warn!("runtime config fetch failed ({}), using defaults", url);
                self.install(RuntimeConfig::default());
            }
        }
    }
}
