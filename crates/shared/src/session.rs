//! Session-scoped key/value storage.
//!
//! The dashboard caches the authenticated user's profile for the duration of
//! a page session so that a reload can restore the signed-in UI without
//! re-prompting for credentials. The storage itself is an injected seam so
//! tests can observe and reset it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key under which the serialized user profile is cached.
pub const PROFILE_KEY: &str = "parkforms.profile";

/// Session-scoped string storage.
///
/// Values live only for the page session; nothing here is durable.
pub trait SessionStore: Send + Sync {
    fn put(&self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// In-memory session storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn put(&self, key: &str, value: String) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), value);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner.read().ok().and_then(|map| map.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(key);
        }
    }
}
