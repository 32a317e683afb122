//! PDF fill request and download payloads.

use serde::{Deserialize, Serialize};

use super::mapping::MappingField;

/// Request body for `POST /cfg/fill-pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FillPdfRequest {
    pub form_id: String,
    /// Template PDF filename on the server.
    pub pdf: String,
    pub fields: Vec<MappingField>,
}

/// A filled PDF ready to hand to the browser download path.
#[derive(Debug, Clone)]
pub struct PdfDownload {
    /// Filename from `Content-Disposition` when present, otherwise derived
    /// from the template name.
    pub filename: String,
    pub bytes: Vec<u8>,
}
