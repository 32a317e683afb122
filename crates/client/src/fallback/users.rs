//! Embedded user directory.

use domain::models::user::{Permissions, Role, User, UserStatus};

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    permissions: Permissions,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        permissions,
    }
}

/// The embedded user directory.
pub fn dataset() -> Vec<User> {
    vec![
        user(
            "U-100",
            "Dana Whitfield",
            "dwhitfield@parks.example",
            Role::Admin,
            UserStatus::Active,
            Role::Admin.default_permissions(),
        ),
        user(
            "U-101",
            "Luis Ortega",
            "lortega@parks.example",
            Role::Editor,
            UserStatus::Active,
            Role::Editor.default_permissions(),
        ),
        user(
            "U-102",
            "Priya Raman",
            "praman@parks.example",
            Role::Editor,
            UserStatus::Active,
            // Audit access granted beyond the editor defaults.
            Permissions {
                view_audit_logs: true,
                ..Role::Editor.default_permissions()
            },
        ),
        user(
            "U-103",
            "Tom Becker",
            "tbecker@parks.example",
            Role::Viewer,
            UserStatus::Active,
            Role::Viewer.default_permissions(),
        ),
        user(
            "U-104",
            "Elaine Fox",
            "efox@parks.example",
            Role::Admin,
            UserStatus::Inactive,
            Role::Admin.default_permissions(),
        ),
        user(
            "U-105",
            "Sam Liu",
            "sliu@parks.example",
            Role::Viewer,
            UserStatus::Inactive,
            Role::Viewer.default_permissions(),
        ),
    ]
}
