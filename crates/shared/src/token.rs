//! In-memory credential storage.
//!
//! Holds the short-lived access token and the CSRF double-submit token for
//! the current page session. Tokens are never persisted; clearing the store
//! is the client-side half of logout.

use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    csrf: Option<String>,
}

/// Shared in-memory token store.
///
/// Writes only happen from the auth lifecycle (login, refresh, logout);
/// everything else reads.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Tokens>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current access token, if a credential is held.
    pub fn access(&self) -> Option<String> {
        self.inner.read().ok().and_then(|t| t.access.clone())
    }

    pub fn set_access(&self, token: impl Into<String>) {
        if let Ok(mut tokens) = self.inner.write() {
            tokens.access = Some(token.into());
        }
    }

    pub fn clear_access(&self) {
        if let Ok(mut tokens) = self.inner.write() {
            tokens.access = None;
        }
    }

    /// Current CSRF double-submit token, if one was issued.
    pub fn csrf(&self) -> Option<String> {
        self.inner.read().ok().and_then(|t| t.csrf.clone())
    }

    pub fn set_csrf(&self, token: impl Into<String>) {
        if let Ok(mut tokens) = self.inner.write() {
            tokens.csrf = Some(token.into());
        }
    }

    /// True while an access token is held.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .map(|t| t.access.is_some())
            .unwrap_or(false)
    }

    /// Clears both tokens. Used on logout and on failed refresh.
    pub fn clear(&self) {
        if let Ok(mut tokens) = self.inner.write() {
            tokens.access = None;
            tokens.csrf = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = TokenStore::new();
        assert_eq!(store.access(), None);
        assert_eq!(store.csrf(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_and_get() {
        let store = TokenStore::new();
        store.set_access("tok-123");
        store.set_csrf("csrf-456");

        assert_eq!(store.access().as_deref(), Some("tok-123"));
        assert_eq!(store.csrf().as_deref(), Some("csrf-456"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_tokens() {
        let store = TokenStore::new();
        store.set_access("tok-123");
        store.set_csrf("csrf-456");
        store.clear();

        assert_eq!(store.access(), None);
        assert_eq!(store.csrf(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_access_keeps_csrf() {
        let store = TokenStore::new();
        store.set_access("tok-123");
        store.set_csrf("csrf-456");
        store.clear_access();

        assert_eq!(store.access(), None);
        assert_eq!(store.csrf().as_deref(), Some("csrf-456"));
    }

    #[test]
    fn test_clone_shares_state() {
        let store = TokenStore::new();
        let other = store.clone();
        store.set_access("tok-123");

        assert_eq!(other.access().as_deref(), Some("tok-123"));
    }
}
