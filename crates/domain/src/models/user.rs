//! Dashboard user models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dashboard role.
///
/// A role implies default permission flags, but the flags stored on the
/// user record stay authoritative once set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// Default permission flags implied by the role.
    pub fn default_permissions(&self) -> Permissions {
        match self {
            Role::Admin => Permissions {
                generate_forms: true,
                manage_users: true,
                view_audit_logs: true,
                run_batch_jobs: true,
            },
            Role::Editor => Permissions {
                generate_forms: true,
                manage_users: false,
                view_audit_logs: false,
                run_batch_jobs: true,
            },
            Role::Viewer => Permissions {
                generate_forms: false,
                manage_users: false,
                view_audit_logs: false,
                run_batch_jobs: false,
            },
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Editor => write!(f, "Editor"),
            Role::Viewer => write!(f, "Viewer"),
        }
    }
}

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Unknown user status: {}", s)),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// Independent permission flags.
///
/// Not derived from the role at read time: an Admin can have a flag revoked
/// and a Viewer can have one granted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub generate_forms: bool,
    pub manage_users: bool,
    pub view_audit_logs: bool,
    pub run_batch_jobs: bool,
}

/// A dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub permissions: Permissions,
}

impl User {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.email]
    }
}

/// Filters for the user admin list.
#[derive(Debug, Clone)]
pub struct UserFilters {
    pub search: String,
    /// Role, or the `"all"` sentinel.
    pub role: String,
    /// Status, or the `"all"` sentinel.
    pub status: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for UserFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: "all".to_string(),
            status: "all".to_string(),
            page: 1,
        }
    }
}

/// User admin list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: i64,
}
