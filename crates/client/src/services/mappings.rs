//! Form field mapping service.

use std::sync::Arc;

use domain::models::mapping::{MappingRequest, MappingResponse};
use domain::models::project::Project;

use crate::error::ClientError;
use crate::fallback;
use crate::http::{HttpClient, RequestPolicy};
use crate::services::should_fall_back;

pub struct MappingService {
    http: Arc<HttpClient>,
}

impl MappingService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches field mappings for the selected forms.
    ///
    /// On failure the mappings are generated from the selected project's own
    /// record, so the degraded preview still carries that project's contract
    /// number, contractor and resident engineer.
    pub async fn mappings_with_project(
        &self,
        form_ids: &[String],
        project: Option<&Project>,
    ) -> Result<MappingResponse, ClientError> {
        let request = MappingRequest {
            form_ids: form_ids.to_vec(),
            project_id: project.map(|p| p.id.clone()),
        };
        match self
            .http
            .post_json("cfg/form_field_mappings", &request, RequestPolicy::default())
            .await
        {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("mapping fetch failed, generating from project record: {}", err);
                Ok(MappingResponse {
                    mappings: fallback::mappings::mappings_for(form_ids, project),
                })
            }
            Err(err) => Err(err),
        }
    }
}
