//! Application shell.
//!
//! Wires the runtime config, the shared HTTP client, one service per
//! resource, and the feature state that outlives any single page: the form
//! generation flow and its navigation guard.

use std::path::Path;
use std::sync::Arc;

use domain::models::batch::{BatchJob, BatchJobFilters, BatchStats};
use shared::config::ConfigHandle;
use shared::session::{MemorySessionStore, SessionStore};
use shared::token::TokenStore;

use crate::error::ClientError;
use crate::http::HttpClient;
use crate::services::{
    AuditLogService, AuthService, BatchService, EeItemService, FormService, MappingService,
    ProjectService, UserService,
};
use crate::settings::Settings;
use crate::state::{FormFlowState, ListStore, NavigationGuard};

pub struct AppShell {
    pub config: ConfigHandle,
    pub http: Arc<HttpClient>,

    pub auth: AuthService,
    pub projects: ProjectService,
    pub forms: FormService,
    pub mappings: MappingService,
    pub users: UserService,
    pub audit_logs: AuditLogService,
    pub batch: BatchService,
    pub ee_items: EeItemService,

    pub flow: FormFlowState,
    pub guard: NavigationGuard,
    pub batch_list: ListStore<BatchJob, BatchJobFilters>,
}

impl AppShell {
    /// Builds the shell from settings and an already-loaded config handle.
    pub fn new(settings: &Settings, config: ConfigHandle) -> Result<Self, ClientError> {
        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        Self::with_session(settings, config, session)
    }

    pub fn with_session(
        settings: &Settings,
        config: ConfigHandle,
        session: Arc<dyn SessionStore>,
    ) -> Result<Self, ClientError> {
        let tokens = TokenStore::new();
        let http = Arc::new(HttpClient::from_config(
            &config.get(),
            tokens,
            Path::new(&settings.fixtures.root),
        )?);

        Ok(Self {
            config,
            auth: AuthService::new(http.clone(), session),
            projects: ProjectService::new(http.clone()),
            forms: FormService::new(http.clone()),
            mappings: MappingService::new(http.clone()),
            users: UserService::new(http.clone()),
            audit_logs: AuditLogService::new(http.clone()),
            batch: BatchService::new(http.clone()),
            ee_items: EeItemService::new(http.clone()),
            flow: FormFlowState::new(),
            guard: NavigationGuard::new(),
            batch_list: ListStore::new(BatchJobFilters::default()),
            http,
        })
    }

    /// Refreshes the batch page: the filtered list through its store, plus
    /// the whole-set stats the dashboard cards bind to.
    pub async fn refresh_batch_page(&self) -> Result<BatchStats, ClientError> {
        self.batch_list
            .refresh(|filters| async move {
                let response = self.batch.jobs(&filters).await?;
                Ok((response.jobs, response.total))
            })
            .await;
        self.batch.stats().await
    }

    /// Applies a search keystroke to the batch list. The edit commits after
    /// the debounce window and then refetches, unless a later keystroke
    /// supersedes it first.
    pub async fn search_batch_jobs(&self, query: impl Into<String>) -> bool {
        let query = query.into();
        self.batch_list
            .debounce_and_refresh(
                |filters| {
                    filters.search = query;
                    filters.page = 1;
                },
                |filters| async move {
                    let response = self.batch.jobs(&filters).await?;
                    Ok((response.jobs, response.total))
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::RuntimeConfig;

    fn offline_shell() -> AppShell {
        let settings = Settings::load_for_test(&[]).expect("Failed to load settings");
        let config = ConfigHandle::new();
        config.install(RuntimeConfig::default());
        AppShell::new(&settings, config).expect("Failed to build shell")
    }

    #[test]
    fn test_shell_builds_in_local_mode() {
        let shell = offline_shell();
        assert!(shell.config.get().is_local_mode());
        assert!(!shell.flow.is_dirty());
    }

    #[tokio::test]
    async fn test_refresh_batch_page_degrades_to_embedded_sample() {
        let shell = offline_shell();

        // Local mode with no fixtures on disk: every call falls back.
        let stats = shell.refresh_batch_page().await.unwrap();
        assert_eq!(stats.total, 10);
        assert_eq!(shell.batch_list.total(), 10);

        // A filtered list never shrinks the dashboard histogram.
        shell
            .batch_list
            .update_filters(|f| f.status = "Error".to_string());
        let stats = shell.refresh_batch_page().await.unwrap();
        assert_eq!(shell.batch_list.total(), 3);
        assert_eq!(stats.total, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_search_commits_and_refetches() {
        let shell = offline_shell();

        let refetched = shell.search_batch_jobs("C-023112").await;

        assert!(refetched);
        assert_eq!(shell.batch_list.filters().search, "C-023112");
        assert_eq!(shell.batch_list.total(), 2);
        assert!(!shell.batch_list.is_loading());
    }
}
