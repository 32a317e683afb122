//! Audit log models.
//!
//! Audit entries are append-only and read-only from the dashboard's
//! perspective; the client only lists and filters them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Audited actions, following the format: resource.operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Login,
    Logout,
    FormGenerate,
    PdfDownload,
    UserCreate,
    UserUpdate,
    UserDeactivate,
    BatchSubmit,
    BatchDownload,
    MappingEdit,
    ConfigChange,
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auth.login" => Ok(AuditAction::Login),
            "auth.logout" => Ok(AuditAction::Logout),
            "form.generate" => Ok(AuditAction::FormGenerate),
            "pdf.download" => Ok(AuditAction::PdfDownload),
            "user.create" => Ok(AuditAction::UserCreate),
            "user.update" => Ok(AuditAction::UserUpdate),
            "user.deactivate" => Ok(AuditAction::UserDeactivate),
            "batch.submit" => Ok(AuditAction::BatchSubmit),
            "batch.download" => Ok(AuditAction::BatchDownload),
            "mapping.edit" => Ok(AuditAction::MappingEdit),
            "config.change" => Ok(AuditAction::ConfigChange),
            _ => Err(format!("Unknown audit action: {}", s)),
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AuditAction::Login => "auth.login",
            AuditAction::Logout => "auth.logout",
            AuditAction::FormGenerate => "form.generate",
            AuditAction::PdfDownload => "pdf.download",
            AuditAction::UserCreate => "user.create",
            AuditAction::UserUpdate => "user.update",
            AuditAction::UserDeactivate => "user.deactivate",
            AuditAction::BatchSubmit => "batch.submit",
            AuditAction::BatchDownload => "batch.download",
            AuditAction::MappingEdit => "mapping.edit",
            AuditAction::ConfigChange => "config.change",
        };
        write!(f, "{}", s)
    }
}

/// Actor information for an audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditActor {
    pub name: String,
    pub email: String,
}

/// One audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub actor: AuditActor,
    pub action: AuditAction,
    /// What the action touched, e.g. a form id or user email.
    pub target: String,
    pub details: String,
    pub ip: String,
}

impl AuditLogEntry {
    /// Fields covered by free-text search.
    pub fn search_fields(&self) -> [&str; 4] {
        [
            &self.actor.name,
            &self.actor.email,
            &self.target,
            &self.details,
        ]
    }
}

/// Filters for the audit log list.
#[derive(Debug, Clone)]
pub struct AuditLogFilters {
    pub search: String,
    /// Action (dotted form), or the `"all"` sentinel.
    pub action: String,
    /// 1-indexed page.
    pub page: usize,
}

impl Default for AuditLogFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            action: "all".to_string(),
            page: 1,
        }
    }
}

/// Audit log list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogsResponse {
    pub entries: Vec<AuditLogEntry>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_action_from_str() {
        assert_eq!(
            AuditAction::from_str("form.generate").unwrap(),
            AuditAction::FormGenerate
        );
        assert_eq!(
            AuditAction::from_str("auth.login").unwrap(),
            AuditAction::Login
        );
        assert!(AuditAction::from_str("form.delete").is_err());
    }

    #[test]
    fn test_audit_action_display() {
        assert_eq!(AuditAction::BatchSubmit.to_string(), "batch.submit");
        assert_eq!(AuditAction::UserDeactivate.to_string(), "user.deactivate");
    }

    #[test]
    fn test_search_fields_cover_actor_and_target() {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor: AuditActor {
                name: "Dana Whitfield".to_string(),
                email: "dwhitfield@parks.example".to_string(),
            },
            action: AuditAction::FormGenerate,
            target: "FORM-003".to_string(),
            details: "Generated change order for P-2024-001".to_string(),
            ip: "10.20.4.18".to_string(),
        };
        assert!(entry.search_fields().contains(&"FORM-003"));
        assert!(entry.search_fields().contains(&"Dana Whitfield"));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor: AuditActor {
                name: "Dana Whitfield".to_string(),
                email: "dwhitfield@parks.example".to_string(),
            },
            action: AuditAction::Login,
            target: String::new(),
            details: String::new(),
            ip: "10.20.4.18".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"action\":\"login\""));
        assert!(json.contains("\"actor\""));
    }
}
