//! Engineer's estimate (EE) line item models.

use serde::{Deserialize, Serialize};

/// One line of a contract's engineer's estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EeItem {
    /// Pay item number, e.g. `4.07AB`.
    pub item_number: String,
    pub description: String,
    /// Unit of measure, e.g. `SF`, `LF`, `EA`.
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub amount: f64,
}

impl EeItem {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.item_number, &self.description]
    }
}

/// Filters for the EE item list.
#[derive(Debug, Clone)]
pub struct EeItemFilters {
    pub search: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for EeItemFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// EE item list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EeItemsResponse {
    pub items: Vec<EeItem>,
    pub total: i64,
}
