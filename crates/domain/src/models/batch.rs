//! Batch job models.
//!
//! Batch jobs fill a whole contract's paperwork server-side. Status
//! transitions happen on the server; the client only reads state and
//! triggers actions.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::{Validate, ValidationError};

lazy_static! {
    /// Comptroller contract number format, e.g. `C-024017`.
    static ref CONTRACT_NUMBER_RE: Regex = Regex::new(r"^C-\d{6}$").unwrap();
}

/// Lifecycle status of a batch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchJobStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl FromStr for BatchJobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BatchJobStatus::Pending),
            "processing" => Ok(BatchJobStatus::Processing),
            "completed" => Ok(BatchJobStatus::Completed),
            "error" => Ok(BatchJobStatus::Error),
            _ => Err(format!("Unknown batch job status: {}", s)),
        }
    }
}

impl std::fmt::Display for BatchJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchJobStatus::Pending => write!(f, "Pending"),
            BatchJobStatus::Processing => write!(f, "Processing"),
            BatchJobStatus::Completed => write!(f, "Completed"),
            BatchJobStatus::Error => write!(f, "Error"),
        }
    }
}

/// A server-side batch paperwork job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJob {
    /// Job id, e.g. `BATCH-2024-0101`.
    pub id: String,
    pub requested_by: String,
    pub contract_number: String,
    pub status: BatchJobStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Present once the job completes.
    pub download_url: Option<String>,
    /// Present when the job errored.
    pub error_message: Option<String>,
}

impl BatchJob {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.id, &self.requested_by, &self.contract_number]
    }
}

/// Filters for the batch job list.
#[derive(Debug, Clone)]
pub struct BatchJobFilters {
    pub search: String,
    /// Status, or the `"all"` sentinel.
    pub status: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for BatchJobFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            page: 1,
        }
    }
}

/// Batch job list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchJobsResponse {
    pub jobs: Vec<BatchJob>,
    pub total: i64,
}

/// Status histogram for the batch dashboard.
///
/// Computed over the whole job set, independent of any list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    pub total: i64,
    pub pending: i64,
    pub processing: i64,
    pub completed: i64,
    pub error: i64,
}

impl BatchStats {
    /// Builds the histogram from a job set.
    pub fn from_jobs(jobs: &[BatchJob]) -> Self {
        let mut stats = Self {
            total: jobs.len() as i64,
            ..Self::default()
        };
        for job in jobs {
            match job.status {
                BatchJobStatus::Pending => stats.pending += 1,
                BatchJobStatus::Processing => stats.processing += 1,
                BatchJobStatus::Completed => stats.completed += 1,
                BatchJobStatus::Error => stats.error += 1,
            }
        }
        stats
    }
}

/// Request body for `POST /batch/jobs`.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBatchJobRequest {
    #[validate(custom(function = "validate_contract_number"))]
    pub contract_number: String,
    #[validate(length(min = 1, message = "At least one form must be selected"))]
    pub form_ids: Vec<String>,
}

fn validate_contract_number(value: &str) -> Result<(), ValidationError> {
    if CONTRACT_NUMBER_RE.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("contract_number_format");
        err.message = Some("Contract number must match C-NNNNNN".into());
        Err(err)
    }
}

/// Actions the client can trigger on an existing job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchJobAction {
    Retry,
    Cancel,
}

impl std::fmt::Display for BatchJobAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchJobAction::Retry => write!(f, "retry"),
            BatchJobAction::Cancel => write!(f, "cancel"),
        }
    }
}

/// Request body for `POST /batch/jobs/{id}/actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchJobActionRequest {
    pub action: BatchJobAction,
}
