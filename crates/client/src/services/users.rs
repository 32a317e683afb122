//! User admin list service.

use std::sync::Arc;

use domain::models::user::{UserFilters, UsersResponse};
use shared::query::{
    matches_choice, matches_search, paginate, sort_ci_by, SortDirection, DEFAULT_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::fallback;
use crate::http::HttpClient;
use crate::services::should_fall_back;

pub struct UserService {
    http: Arc<HttpClient>,
}

impl UserService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the user list, degrading to the embedded roster.
    pub async fn list(&self, filters: &UserFilters) -> Result<UsersResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("role", filters.role.as_str()),
            ("status", filters.status.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("users", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("user list fetch failed, serving embedded roster: {}", err);
                Ok(Self::fallback(filters))
            }
            Err(err) => Err(err),
        }
    }

    fn fallback(filters: &UserFilters) -> UsersResponse {
        let mut users: Vec<_> = fallback::users::dataset()
            .into_iter()
            .filter(|u| matches_search(&filters.search, &u.search_fields()))
            .filter(|u| matches_choice(&filters.role, &u.role.to_string()))
            .filter(|u| matches_choice(&filters.status, &u.status.to_string()))
            .collect();
        sort_ci_by(&mut users, SortDirection::Ascending, |u| u.name.as_str());
        let total = users.len() as i64;
        UsersResponse {
            users: paginate(&users, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }
}
