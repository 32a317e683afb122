//! Embedded batch job sample.
//!
//! Ten jobs, three of them in `Error` status, so the degraded batch
//! dashboard still shows a meaningful status mix.

use chrono::{DateTime, Utc};
use domain::models::batch::{BatchJob, BatchJobStatus};

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

struct JobSpec {
    id: &'static str,
    requested_by: &'static str,
    contract_number: &'static str,
    status: BatchJobStatus,
    submitted_at: &'static str,
    completed_at: Option<&'static str>,
    download_url: Option<&'static str>,
    error_message: Option<&'static str>,
}

impl JobSpec {
    fn build(&self) -> BatchJob {
        BatchJob {
            id: self.id.to_string(),
            requested_by: self.requested_by.to_string(),
            contract_number: self.contract_number.to_string(),
            status: self.status,
            submitted_at: ts(self.submitted_at),
            completed_at: self.completed_at.map(ts),
            download_url: self.download_url.map(str::to_string),
            error_message: self.error_message.map(str::to_string),
        }
    }
}

const JOBS: &[JobSpec] = &[
    JobSpec {
        id: "BATCH-2024-0101",
        requested_by: "dwhitfield@parks.example",
        contract_number: "C-024001",
        status: BatchJobStatus::Completed,
        submitted_at: "2024-06-10T09:15:00Z",
        completed_at: Some("2024-06-10T09:21:42Z"),
        download_url: Some("/batch/jobs/BATCH-2024-0101/download"),
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0102",
        requested_by: "lortega@parks.example",
        contract_number: "C-023112",
        status: BatchJobStatus::Error,
        submitted_at: "2024-06-10T14:02:00Z",
        completed_at: None,
        download_url: None,
        error_message: Some("Template FORM-004 failed to fill: missing field InspectorName"),
    },
    JobSpec {
        id: "BATCH-2024-0103",
        requested_by: "praman@parks.example",
        contract_number: "C-023088",
        status: BatchJobStatus::Completed,
        submitted_at: "2024-06-11T10:30:00Z",
        completed_at: Some("2024-06-11T10:39:05Z"),
        download_url: Some("/batch/jobs/BATCH-2024-0103/download"),
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0104",
        requested_by: "dwhitfield@parks.example",
        contract_number: "C-022140",
        status: BatchJobStatus::Error,
        submitted_at: "2024-06-11T16:45:00Z",
        completed_at: None,
        download_url: None,
        error_message: Some("Contract closed; requisition forms rejected"),
    },
    JobSpec {
        id: "BATCH-2024-0105",
        requested_by: "lortega@parks.example",
        contract_number: "C-024016",
        status: BatchJobStatus::Processing,
        submitted_at: "2024-06-12T08:20:00Z",
        completed_at: None,
        download_url: None,
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0106",
        requested_by: "dwhitfield@parks.example",
        contract_number: "C-024001",
        status: BatchJobStatus::Completed,
        submitted_at: "2024-06-12T13:55:00Z",
        completed_at: Some("2024-06-12T14:03:17Z"),
        download_url: Some("/batch/jobs/BATCH-2024-0106/download"),
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0107",
        requested_by: "praman@parks.example",
        contract_number: "C-023063",
        status: BatchJobStatus::Pending,
        submitted_at: "2024-06-13T09:00:00Z",
        completed_at: None,
        download_url: None,
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0108",
        requested_by: "lortega@parks.example",
        contract_number: "C-024022",
        status: BatchJobStatus::Error,
        submitted_at: "2024-06-13T11:35:00Z",
        completed_at: None,
        download_url: None,
        error_message: Some("PDF service timeout after 120s"),
    },
    JobSpec {
        id: "BATCH-2024-0109",
        requested_by: "dwhitfield@parks.example",
        contract_number: "C-024007",
        status: BatchJobStatus::Pending,
        submitted_at: "2024-06-14T10:10:00Z",
        completed_at: None,
        download_url: None,
        error_message: None,
    },
    JobSpec {
        id: "BATCH-2024-0110",
        requested_by: "praman@parks.example",
        contract_number: "C-023112",
        status: BatchJobStatus::Processing,
        submitted_at: "2024-06-14T15:25:00Z",
        completed_at: None,
        download_url: None,
        error_message: None,
    },
];

/// The embedded batch job list.
pub fn dataset() -> Vec<BatchJob> {
    JOBS.iter().map(JobSpec::build).collect()
}
