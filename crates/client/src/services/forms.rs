//! Form catalog and PDF fill service.

use std::sync::Arc;

use domain::models::form::{FormCatalogResponse, FormFilters};
use domain::models::pdf::{FillPdfRequest, PdfDownload};
use shared::query::{
    matches_choice, matches_search, paginate, sort_ci_by, SortDirection, DEFAULT_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::fallback;
use crate::http::HttpClient;
use crate::services::should_fall_back;

pub struct FormService {
    http: Arc<HttpClient>,
}

impl FormService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Fetches the form catalog, degrading to the embedded catalog.
    pub async fn catalog(&self, filters: &FormFilters) -> Result<FormCatalogResponse, ClientError> {
        let page = filters.page.to_string();
        let query = [
            ("search", filters.search.as_str()),
            ("category", filters.category.as_str()),
            ("page", page.as_str()),
        ];
        match self.http.get_json("formCatalog", &query).await {
            Ok(response) => Ok(response),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("form catalog fetch failed, serving embedded catalog: {}", err);
                Ok(Self::fallback(filters))
            }
            Err(err) => Err(err),
        }
    }

    /// Fills a PDF template server-side and returns the document bytes.
    ///
    /// The `Content-Disposition` filename is honored when the server sends
    /// one; otherwise the template name is reused. Offline, a mock document
    /// is substituted so the download path still completes.
    pub async fn fill_pdf(&self, request: &FillPdfRequest) -> Result<PdfDownload, ClientError> {
        match self.http.post_download("cfg/fill-pdf", request).await {
            Ok((filename, bytes)) => Ok(PdfDownload {
                filename: filename.unwrap_or_else(|| request.pdf.clone()),
                bytes,
            }),
            Err(err) if should_fall_back(&err) => {
                tracing::warn!("pdf fill failed, substituting mock document: {}", err);
                Ok(PdfDownload {
                    filename: request.pdf.clone(),
                    bytes: fallback::MOCK_PDF_BYTES.to_vec(),
                })
            }
            Err(err) => Err(err),
        }
    }

    fn fallback(filters: &FormFilters) -> FormCatalogResponse {
        let mut forms: Vec<_> = fallback::forms::dataset()
            .into_iter()
            .filter(|f| matches_search(&filters.search, &f.search_fields()))
            .filter(|f| matches_choice(&filters.category, &f.category))
            .collect();
        sort_ci_by(&mut forms, SortDirection::Ascending, |f| f.title.as_str());
        let total = forms.len() as i64;
        FormCatalogResponse {
            forms: paginate(&forms, filters.page, DEFAULT_PAGE_SIZE),
            total,
        }
    }
}
