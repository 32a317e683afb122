//! Audit log list service.

use std::sync::Arc;

use domain::models::audit_log::{AuditLogFilters, AuditLogsResponse};
use shared::query::{
    matches_choice, matches_search, paginate, sort_by_date, SortDirection, DEFAULT_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::fallback;
use crate::http::HttpClient;
use crate::services::should_fall_back;

pub struct AuditLogService {
    http: Arc<HttpClient>,
}

impl AuditLogService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the audit log, degrading to the embedded sample.
    pub async fn list(&self, filters: &AuditLogFilters) -> Result<AuditLogsResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("action", filters.action.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("auditLogs", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("audit log fetch failed, serving embedded sample: {}", err);
                Ok(Self::fallback(filters))
            }
            Err(err) => Err(err),
        }
    }

    fn fallback(filters: &AuditLogFilters) -> AuditLogsResponse {
        let mut entries: Vec<_> = fallback::audit_logs::dataset()
            .into_iter()
            .filter(|e| matches_search(&filters.search, &e.search_fields()))
            .filter(|e| matches_choice(&filters.action, &e.action.to_string()))
            .collect();
        // Newest first, regardless of the order entries arrive in.
        sort_by_date(&mut entries, SortDirection::Descending, |e| {
            e.timestamp.to_rfc3339()
        });
        let total = entries.len() as i64;
        AuditLogsResponse {
            entries: paginate(&entries, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }
}
