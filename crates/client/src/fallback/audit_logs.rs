//! Embedded audit log sample.

use chrono::{DateTime, Utc};
use domain::models::audit_log::{AuditAction, AuditActor, AuditLogEntry};
use uuid::Uuid;

fn ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn entry(
    timestamp: &str,
    name: &str,
    email: &str,
    action: AuditAction,
    target: &str,
    details: &str,
    ip: &str,
) -> AuditLogEntry {
    AuditLogEntry {
        id: Uuid::new_v4(),
        timestamp: ts(timestamp),
        actor: AuditActor {
            name: name.to_string(),
            email: email.to_string(),
        },
        action,
        target: target.to_string(),
        details: details.to_string(),
        ip: ip.to_string(),
    }
}

/// The embedded audit log, newest first.
pub fn dataset() -> Vec<AuditLogEntry> {
    vec![
        entry(
            "2024-06-14T16:42:10Z",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            AuditAction::BatchDownload,
            "BATCH-2024-0106",
            "Downloaded completed batch archive",
            "10.20.4.18",
        ),
        entry(
            "2024-06-14T15:07:55Z",
            "Luis Ortega",
            "lortega@parks.example",
            AuditAction::FormGenerate,
            "FORM-003",
            "Generated change order for P-2024-001",
            "10.20.4.31",
        ),
        entry(
            "2024-06-14T14:58:02Z",
            "Luis Ortega",
            "lortega@parks.example",
            AuditAction::PdfDownload,
            "FORM-001",
            "Downloaded work permit for P-2024-016",
            "10.20.4.31",
        ),
        entry(
            "2024-06-14T09:12:40Z",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            AuditAction::UserCreate,
            "sliu@parks.example",
            "Created viewer account",
            "10.20.4.18",
        ),
        entry(
            "2024-06-13T17:30:21Z",
            "Priya Raman",
            "praman@parks.example",
            AuditAction::BatchSubmit,
            "C-023112",
            "Submitted closeout batch for Harbor View esplanade",
            "10.20.5.2",
        ),
        entry(
            "2024-06-13T11:05:33Z",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            AuditAction::UserUpdate,
            "praman@parks.example",
            "Granted audit log access",
            "10.20.4.18",
        ),
        entry(
            "2024-06-12T16:48:09Z",
            "Priya Raman",
            "praman@parks.example",
            AuditAction::MappingEdit,
            "FORM-005",
            "Overrode inspector name field",
            "10.20.5.2",
        ),
        entry(
            "2024-06-12T08:59:47Z",
            "Luis Ortega",
            "lortega@parks.example",
            AuditAction::Login,
            "",
            "",
            "10.20.4.31",
        ),
        entry(
            "2024-06-11T18:22:13Z",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            AuditAction::UserDeactivate,
            "efox@parks.example",
            "Deactivated departed administrator",
            "10.20.4.18",
        ),
        entry(
            "2024-06-11T13:40:58Z",
            "Tom Becker",
            "tbecker@parks.example",
            AuditAction::Login,
            "",
            "",
            "10.20.6.77",
        ),
        entry(
            "2024-06-10T15:15:26Z",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            AuditAction::ConfigChange,
            "runtime-config.json",
            "Enabled router navigation mode",
            "10.20.4.18",
        ),
        entry(
            "2024-06-10T08:01:19Z",
            "Priya Raman",
            "praman@parks.example",
            AuditAction::Logout,
            "",
            "",
            "10.20.5.2",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_is_newest_first() {
        let entries = dataset();
        assert_eq!(entries.len(), 12);
        for pair in entries.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_dataset_contains_login_events() {
        let entries = dataset();
        assert_eq!(
            entries
                .iter()
                .filter(|e| e.action == AuditAction::Login)
                .count(),
            2
        );
    }
}
