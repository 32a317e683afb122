//! HTTP layer: transport seam and the authenticated client.

pub mod client;
pub mod transport;

pub use client::{HttpClient, RequestPolicy};
pub use transport::{ApiRequest, ApiResponse, LocalTransport, Method, NetworkTransport, Transport};
