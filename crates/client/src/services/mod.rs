//! Resource services.
//!
//! Each service tries the network first and returns its result verbatim;
//! on failure it serves the embedded dataset, filtered client-side, with
//! aggregate counts recomputed from the filtered set. The one error that is
//! never converted into fallback data is an auth failure, which must reach
//! the UI so it can prompt for login.

pub mod audit_logs;
pub mod auth;
pub mod batch;
pub mod ee_items;
pub mod forms;
pub mod mappings;
pub mod projects;
pub mod users;

pub use audit_logs::AuditLogService;
pub use auth::AuthService;
pub use batch::BatchService;
pub use ee_items::EeItemService;
pub use forms::FormService;
pub use mappings::MappingService;
pub use projects::ProjectService;
pub use users::UserService;

use crate::error::ClientError;

/// Whether a failed network call should degrade to the embedded dataset.
///
/// Auth failures propagate; validation never reached the network in the
/// first place; a fallback failure is already terminal.
pub(crate) fn should_fall_back(err: &ClientError) -> bool {
    !matches!(
        err,
        ClientError::RefreshFailed | ClientError::Validation(_) | ClientError::Fallback(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_fall_back() {
        assert!(should_fall_back(&ClientError::status(503, "down")));
        assert!(should_fall_back(&ClientError::OfflineWrite {
            path: "batch/jobs".to_string()
        }));
    }

    #[test]
    fn test_auth_and_validation_do_not_fall_back() {
        assert!(!should_fall_back(&ClientError::RefreshFailed));
        assert!(!should_fall_back(&ClientError::Validation("bad".to_string())));
        assert!(!should_fall_back(&ClientError::Fallback("gone".to_string())));
    }
}
