//! Project catalog service.

use std::sync::Arc;

use domain::models::project::{ProjectCatalogResponse, ProjectFilters};
use shared::query::{
    matches_choice, matches_search, paginate, sort_ci_by, SortDirection, DEFAULT_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::fallback;
use crate::http::HttpClient;
use crate::services::should_fall_back;

pub struct ProjectService {
    http: Arc<HttpClient>,
}

impl ProjectService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the project catalog, degrading to the embedded catalog.
    pub async fn catalog(
        &self,
        filters: &ProjectFilters,
    ) -> Result<ProjectCatalogResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("status", filters.status.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("projectCatalog", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("project catalog fetch failed, serving embedded catalog: {}", err);
                Ok(Self::fallback(filters))
            }
            Err(err) => Err(err),
        }
    }

    fn fallback(filters: &ProjectFilters) -> ProjectCatalogResponse {
        let mut projects: Vec<_> = fallback::projects::dataset()
            .into_iter()
            .filter(|p| matches_search(&filters.search, &p.search_fields()))
            .filter(|p| matches_choice(&filters.status, &p.contract_status.to_string()))
            .collect();
        sort_ci_by(&mut projects, SortDirection::Ascending, |p| p.park_name.as_str());
        let total = projects.len() as i64;
        ProjectCatalogResponse {
            projects: paginate(&projects, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }
}
