//! Park construction project models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Contract status of a capital project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    /// Contract registered with the comptroller, work not started.
    Registered,
    /// Construction in progress.
    Active,
    /// Substantially complete, punch list outstanding.
    Substantial,
    /// Contract closed out.
    Closed,
}

impl FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registered" => Ok(ContractStatus::Registered),
            "active" => Ok(ContractStatus::Active),
            "substantial" => Ok(ContractStatus::Substantial),
            "closed" => Ok(ContractStatus::Closed),
            _ => Err(format!("Unknown contract status: {}", s)),
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractStatus::Registered => write!(f, "Registered"),
            ContractStatus::Active => write!(f, "Active"),
            ContractStatus::Substantial => write!(f, "Substantial"),
            ContractStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A municipal park construction project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Capital project id, e.g. `P-2024-017`.
    pub id: String,
    pub description: String,
    pub park_name: String,
    pub contract_status: ContractStatus,
    pub funding_amount: f64,
    pub progress_percent: u8,
    /// General contractor of record.
    pub contractor: String,
    /// Resident engineer assigned to the site.
    pub resident_engineer: String,
}

impl Project {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.id, &self.description, &self.park_name]
    }
}

/// Filters for the project catalog list.
#[derive(Debug, Clone)]
pub struct ProjectFilters {
    pub search: String,
    /// Contract status, or the `"all"` sentinel.
    pub status: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for ProjectFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            page: 1,
        }
    }
}

/// Project catalog list response.
///
/// `total` counts the whole filtered set, not the returned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCatalogResponse {
    pub projects: Vec<Project>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_status_from_str() {
        assert_eq!(
            ContractStatus::from_str("active").unwrap(),
            ContractStatus::Active
        );
        assert_eq!(
            ContractStatus::from_str("Substantial").unwrap(),
            ContractStatus::Substantial
        );
        assert!(ContractStatus::from_str("demolished").is_err());
    }

    #[test]
    fn test_contract_status_display() {
        assert_eq!(ContractStatus::Registered.to_string(), "Registered");
        assert_eq!(ContractStatus::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_default_filters() {
        let filters = ProjectFilters::default();
        assert_eq!(filters.search, "");
        assert_eq!(filters.status, "all");
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn test_project_serialization_is_camel_case() {
        let project = Project {
            id: "P-2024-001".to_string(),
            description: "Playground reconstruction".to_string(),
            park_name: "Riverside Park".to_string(),
            contract_status: ContractStatus::Active,
            funding_amount: 2_450_000.0,
            progress_percent: 45,
            contractor: "Hudson Valley Builders".to_string(),
            resident_engineer: "M. Okafor".to_string(),
        };

        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("parkName"));
        assert!(json.contains("contractStatus"));
        assert!(json.contains("fundingAmount"));
        assert!(json.contains("residentEngineer"));
    }
}
