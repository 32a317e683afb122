//! Batch job service.
//!
//! Covers the full batch surface: list, detail, dashboard stats, submit,
//! retry/cancel actions and archive download. Stats are always computed over
//! the whole job set so the dashboard histogram never shrinks when the list
//! is filtered.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use domain::models::batch::{
    BatchJob, BatchJobAction, BatchJobActionRequest, BatchJobFilters, BatchJobStatus,
    BatchJobsResponse, BatchStats, SubmitBatchJobRequest,
};
use shared::query::{
    matches_choice, matches_search, paginate, sort_by_date, SortDirection, DEFAULT_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::fallback;
use crate::http::{HttpClient, RequestPolicy};
use crate::services::should_fall_back;

pub struct BatchService {
    http: Arc<HttpClient>,
}

impl BatchService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the batch job list, degrading to the embedded sample.
    pub async fn jobs(&self, filters: &BatchJobFilters) -> Result<BatchJobsResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("status", filters.status.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("batch/jobs", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch job list fetch failed, serving embedded sample: {}", err);
                Ok(Self::fallback_jobs(filters))
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches one job by id.
    pub async fn job(&self, id: &str) -> Result<BatchJob, ClientError> {
        let path = format!("batch/jobs/{}", id);
        match self.http.get_json(&path, &[]).await {
            Ok(job) => Ok(job),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch job fetch failed, consulting embedded sample: {}", err);
                Self::fallback_job(id)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetches the dashboard status histogram.
    pub async fn stats(&self) -> Result<BatchStats, ClientError> {
        match self.http.get_json("batch/dashboard/stats", &[]).await {
            Ok(stats) => Ok(stats),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch stats fetch failed, computing from embedded sample: {}", err);
                Ok(BatchStats::from_jobs(&fallback::batch::dataset()))
            }
            Err(err) => Err(err),
        }
    }

    /// Submits a new batch job.
    ///
    /// The request is validated before any network activity; an invalid
    /// contract number or empty form selection never leaves the client.
    /// Offline, a pending job is synthesized so the submission flow still
    /// lands on a job detail.
    pub async fn submit(&self, request: &SubmitBatchJobRequest) -> Result<BatchJob, ClientError> {
        request.validate()?;
        match self
            .http
            .post_json("batch/jobs", request, RequestPolicy::default())
            .await
        {
            Ok(job) => Ok(job),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch submit failed, synthesizing local job: {}", err);
                Ok(Self::local_job(request))
            }
            Err(err) => Err(err),
        }
    }

    /// Triggers a retry or cancel on an existing job.
    pub async fn act(&self, id: &str, action: BatchJobAction) -> Result<BatchJob, ClientError> {
        let path = format!("batch/jobs/{}/actions", id);
        let body = BatchJobActionRequest { action };
        match self
            .http
            .post_json(&path, &body, RequestPolicy::default())
            .await
        {
            Ok(job) => Ok(job),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch action failed, applying to embedded sample: {}", err);
                let mut job = Self::fallback_job(id)?;
                match action {
                    BatchJobAction::Retry => {
                        job.status = BatchJobStatus::Pending;
                        job.error_message = None;
                    }
                    BatchJobAction::Cancel => {
                        job.status = BatchJobStatus::Error;
                        job.error_message = Some("Cancelled by user".to_string());
                    }
                }
                Ok(job)
            }
            Err(err) => Err(err),
        }
    }

    /// Downloads a completed job's archive.
    pub async fn download(&self, id: &str) -> Result<(String, Vec<u8>), ClientError> {
        let path = format!("batch/jobs/{}/download", id);
        let default_name = format!("{}.zip", id);
        match self.http.get_bytes(&path).await {
            Ok((filename, bytes)) => Ok((filename.unwrap_or(default_name), bytes)),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("batch download failed, substituting mock archive: {}", err);
                let job = Self::fallback_job(id)?;
                if job.status == BatchJobStatus::Completed {
                    Ok((default_name, fallback::MOCK_ARCHIVE_BYTES.to_vec()))
                } else {
                    Err(ClientError::Fallback(format!(
                        "job {} has no downloadable archive",
                        id
                    )))
                }
            }
            Err(err) => Err(err),
        }
    }

    fn fallback_jobs(filters: &BatchJobFilters) -> BatchJobsResponse {
        let mut jobs: Vec<_> = fallback::batch::dataset()
            .into_iter()
            .filter(|j| matches_search(&filters.search, &j.search_fields()))
            .filter(|j| matches_choice(&filters.status, &j.status.to_string()))
            .collect();
        // Most recent submission first.
        sort_by_date(&mut jobs, SortDirection::Descending, |j| {
            j.submitted_at.to_rfc3339()
        });
        let total = jobs.len() as i64;
        BatchJobsResponse {
            jobs: paginate(&jobs, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }

    fn fallback_job(id: &str) -> Result<BatchJob, ClientError> {
        fallback::batch::dataset()
            .into_iter()
            .find(|j| j.id == id)
            .ok_or_else(|| ClientError::Fallback(format!("batch job {} not found", id)))
    }

    fn local_job(request: &SubmitBatchJobRequest) -> BatchJob {
        BatchJob {
            id: format!("BATCH-LOCAL-{}", Uuid::new_v4().simple()),
            requested_by: "offline".to_string(),
            contract_number: request.contract_number.clone(),
            status: BatchJobStatus::Pending,
            submitted_at: Utc::now(),
            completed_at: None,
            download_url: None,
            error_message: None,
        }
    }
}
