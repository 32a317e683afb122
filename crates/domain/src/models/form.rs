//! Form catalog models.
//!
//! A `FormItem` is a catalog entry describing a fillable PDF template
//! (permit form, inspection checklist, change order), not the template
//! bytes themselves.

use serde::{Deserialize, Serialize};

/// A fillable-form catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormItem {
    /// Catalog id, e.g. `FORM-003`.
    pub id: String,
    pub title: String,
    /// Display category, e.g. `Permits`, `Inspections`, `Change Orders`.
    pub category: String,
    /// Underlying template type, e.g. `AcroForm`.
    pub template_type: String,
    pub field_count: u32,
    pub version: String,
}

impl FormItem {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.id, &self.title, &self.category]
    }
}

/// Filters for the form catalog list.
#[derive(Debug, Clone)]
pub struct FormFilters {
    pub search: String,
    /// Category, or the `"all"` sentinel.
    pub category: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for FormFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".to_string(),
            page: 1,
        }
    }
}

/// Form catalog list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCatalogResponse {
    pub forms: Vec<FormItem>,
    pub total: i64,
}
