//! Engineer's estimate item service.

use std::sync::Arc;

use domain::models::ee_item::{EeItemFilters, EeItemsResponse};
use shared::query::{matches_search, paginate, sort_ci_by, SortDirection, DEFAULT_PAGE_SIZE};

use crate::error::ClientError;
use crate::fallback;
use crate::http::HttpClient;
use crate::services::should_fall_back;

pub struct EeItemService {
    http: Arc<HttpClient>,
}

impl EeItemService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches EE line items, degrading to the embedded estimate.
    pub async fn list(&self, filters: &EeItemFilters) -> Result<EeItemsResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("eeItems", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("ee item fetch failed, serving embedded estimate: {}", err);
                Ok(Self::fallback(filters))
            }
            Err(err) => Err(err),
        }
    }

    fn fallback(filters: &EeItemFilters) -> EeItemsResponse {
        let mut items: Vec<_> = fallback::ee_items::dataset()
            .into_iter()
            .filter(|i| matches_search(&filters.search, &i.search_fields()))
            .collect();
        sort_ci_by(&mut items, SortDirection::Ascending, |i| i.item_number.as_str());
        let total = items.len() as i64;
        EeItemsResponse {
            items: paginate(&items, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }
}
