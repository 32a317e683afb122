//! Authentication payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::{Permissions, Role};

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile returned with a successful login.
///
/// Cached (JSON-serialized) in session storage so a page reload within the
/// same session can restore the authenticated UI state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub permissions: Permissions,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Short-lived access token; held only in memory.
    pub access: String,
    pub profile: UserProfile,
    /// CSRF double-submit token, when the backend issues one in-band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xsrf_token: Option<String>,
}

/// Response body for `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_both_fields() {
        let req = LoginRequest {
            username: String::new(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            username: "dwhitfield".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            username: "dwhitfield".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_response_without_xsrf_token() {
        let json = r#"{"access":"tok-1","profile":{"id":"U-100","name":"Dana Whitfield",
            "email":"dwhitfield@parks.example","role":"Admin","permissions":
            {"generateForms":true,"manageUsers":true,"viewAuditLogs":true,"runBatchJobs":true}}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access, "tok-1");
        assert_eq!(response.xsrf_token, None);
        assert_eq!(response.profile.role, Role::Admin);
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = UserProfile {
            id: "U-100".to_string(),
            name: "Dana Whitfield".to_string(),
            email: "dwhitfield@parks.example".to_string(),
            role: Role::Editor,
            permissions: Role::Editor.default_permissions(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
