//! Generic list state with stale-response discard and search debounce.
//!
//! Every filterable list page shares the same shape: items, a total count,
//! loading and error flags, and the current filters. Responses are tagged
//! with a generation counter at request time; a response whose generation is
//! no longer current is discarded, so a slow page-1 reply can never
//! overwrite a faster page-2 reply the user has already navigated to.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use crate::error::ClientError;

/// How long a keystroke must stand before the search filter commits.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(280);

struct ListState<T> {
    items: Vec<T>,
    total: i64,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            loading: false,
            error: None,
        }
    }
}

/// List page state for items of type `T` filtered by `F`.
pub struct ListStore<T, F> {
    state: RwLock<ListState<T>>,
    filters: RwLock<F>,
    generation: AtomicU64,
    debounce_seq: AtomicU64,
}

impl<T: Clone, F: Clone + Default> Default for ListStore<T, F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<T: Clone, F: Clone> ListStore<T, F> {
    pub fn new(filters: F) -> Self {
        Self {
            state: RwLock::new(ListState::default()),
            filters: RwLock::new(filters),
            generation: AtomicU64::new(0),
            debounce_seq: AtomicU64::new(0),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.state.read().map(|s| s.items.clone()).unwrap_or_default()
    }

    pub fn total(&self) -> i64 {
        self.state.read().map(|s| s.total).unwrap_or(0)
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().map(|s| s.loading).unwrap_or(false)
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().ok().and_then(|s| s.error.clone())
    }

    pub fn filters(&self) -> F {
        self.filters
            .read()
            .map(|f| f.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Mutates the filters in place, e.g. to change page or a choice filter.
    pub fn update_filters(&self, apply: impl FnOnce(&mut F)) {
        if let Ok(mut filters) = self.filters.write() {
            apply(&mut filters);
        }
    }

    /// Runs a fetch against the current filters and commits the result only
    /// if no newer fetch started in the meantime. Returns whether the result
    /// was committed.
    pub async fn refresh<Fut>(&self, fetch: impl FnOnce(F) -> Fut) -> bool
    where
        Fut: Future<Output = Result<(Vec<T>, i64), ClientError>>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut state) = self.state.write() {
            state.loading = true;
            state.error = None;
        }

        let result = fetch(self.filters()).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            // A newer fetch owns the loading flag now.
            return false;
        }
        if let Ok(mut state) = self.state.write() {
            state.loading = false;
            match result {
                Ok((items, total)) => {
                    state.items = items;
                    state.total = total;
                }
                Err(err) => state.error = Some(err.to_string()),
            }
        }
        true
    }

    /// Applies a search edit after the debounce window, unless another edit
    /// supersedes it first. Returns whether the edit was applied.
    pub async fn debounce_search(&self, apply: impl FnOnce(&mut F)) -> bool {
        let seq = self.debounce_seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(SEARCH_DEBOUNCE).await;
        if self.debounce_seq.load(Ordering::SeqCst) != seq {
            return false;
        }
        self.update_filters(apply);
        true
    }

    /// Debounced search edit followed by a refetch against the committed
    /// filters. A burst of keystrokes produces a single request for the
    /// final query; superseded edits never reach the network. Returns
    /// whether a result was committed.
    pub async fn debounce_and_refresh<Fut>(
        &self,
        apply: impl FnOnce(&mut F),
        fetch: impl FnOnce(F) -> Fut,
    ) -> bool
    where
        Fut: Future<Output = Result<(Vec<T>, i64), ClientError>>,
    {
        if !self.debounce_search(apply).await {
            return false;
        }
        self.refresh(fetch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::project::{Project, ProjectFilters};

    use crate::fallback;

    fn store() -> ListStore<Project, ProjectFilters> {
        ListStore::new(ProjectFilters::default())
    }

    #[tokio::test]
    async fn test_refresh_commits_items_and_total() {
        let store = store();
        let committed = store
            .refresh(|_filters| async {
                let projects = fallback::projects::dataset();
                let total = projects.len() as i64;
                Ok((projects, total))
            })
            .await;

        assert!(committed);
        assert!(!store.is_loading());
        assert_eq!(store.total(), 8);
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_refresh_records_error() {
        let store = store();
        let committed = store
            .refresh(|_filters| async { Err(ClientError::RefreshFailed) })
            .await;

        assert!(committed);
        assert!(store.error().is_some());
        assert!(store.items().is_empty());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let store = std::sync::Arc::new(store());

        // A slow fetch starts first, then a fast one supersedes it.
        let slow = {
            let store = store.clone();
            async move {
                store
                    .refresh(|_| async {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok((fallback::projects::dataset(), 999))
                    })
                    .await
            }
        };
        let fast = {
            let store = store.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                store.refresh(|_| async { Ok((Vec::new(), 1)) }).await
            }
        };

        let (slow_committed, fast_committed) = tokio::join!(slow, fast);
        assert!(!slow_committed);
        assert!(fast_committed);
        assert_eq!(store.total(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_superseded_edit_is_dropped() {
        let store = std::sync::Arc::new(store());

        let first = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .debounce_search(|f| f.search = "riv".to_string())
                    .await
            })
        };
        // The second keystroke lands inside the debounce window.
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .debounce_search(|f| f.search = "riverside".to_string())
                    .await
            })
        };

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
        assert_eq!(store.filters().search, "riverside");
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_lone_edit_applies() {
        let store = store();
        let applied = store.debounce_search(|f| f.search = "harbor".to_string()).await;
        assert!(applied);
        assert_eq!(store.filters().search, "harbor");
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_edit_triggers_refetch() {
        let store = store();
        let fetches = AtomicU64::new(0);
        let fetches_ref = &fetches;

        let committed = store
            .debounce_and_refresh(
                |f| f.search = "harbor".to_string(),
                |filters| async move {
                    fetches_ref.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(filters.search, "harbor");
                    Ok((Vec::new(), 2))
                },
            )
            .await;

        assert!(committed);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(store.total(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_edit_never_refetches() {
        let store = std::sync::Arc::new(store());
        let fetches = std::sync::Arc::new(AtomicU64::new(0));

        let first = {
            let store = store.clone();
            let fetches = fetches.clone();
            tokio::spawn(async move {
                store
                    .debounce_and_refresh(
                        |f| f.search = "riv".to_string(),
                        |_| async move {
                            fetches.fetch_add(1, Ordering::SeqCst);
                            Ok((Vec::new(), 1))
                        },
                    )
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = {
            let store = store.clone();
            let fetches = fetches.clone();
            tokio::spawn(async move {
                store
                    .debounce_and_refresh(
                        |f| f.search = "riverside".to_string(),
                        |_| async move {
                            fetches.fetch_add(1, Ordering::SeqCst);
                            Ok((Vec::new(), 3))
                        },
                    )
                    .await
            })
        };

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
        // Only the surviving edit hit the network.
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(store.filters().search, "riverside");
        assert_eq!(store.total(), 3);
    }

    #[test]
    fn test_update_filters_in_place() {
        let store = store();
        store.update_filters(|f| f.page = 3);
        assert_eq!(store.filters().page, 3);
    }
}
