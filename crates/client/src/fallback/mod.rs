//! Embedded fallback datasets.
//!
//! When the backend is unreachable the resource services serve these
//! catalogs instead, filtered client-side. Content is deterministic so the
//! degraded dashboard behaves predictably and tests can assert on counts.

pub mod audit_logs;
pub mod batch;
pub mod ee_items;
pub mod forms;
pub mod mappings;
pub mod projects;
pub mod users;

/// Stand-in bytes returned for PDF fills while offline.
pub const MOCK_PDF_BYTES: &[u8] = b"%PDF-1.4 parkforms offline mock document";

/// Stand-in bytes returned for batch archive downloads while offline.
pub const MOCK_ARCHIVE_BYTES: &[u8] = b"PK parkforms offline mock archive";
