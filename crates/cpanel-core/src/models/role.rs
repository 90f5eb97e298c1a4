//! Transient role definitions and merged permission views.

use serde::{Deserialize, Serialize};

/// An ad hoc role definition: a name plus an ordered list of action
/// permissions. Built inline by callers, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDef {
    pub name: String,
    pub actions: Vec<String>,
}

impl RoleDef {
    /// The fixed `generic` role covering the four CRUD actions.
    pub fn generic() -> Self {
        Self {
            name: "generic".into(),
            actions: vec![
                "view".into(),
                "create".into(),
                "update".into(),
                "delete".into(),
            ],
        }
    }
}

/// A single permission marked against a grant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionFlag {
    pub name: String,
    pub granted: bool,
}

/// Merged view of one role's actions against a grant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePermissionView {
    pub role: String,
    pub permissions: Vec<PermissionFlag>,
}

/// Merged view of one module's permissions against a grant set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePermissionView {
    pub module: String,
    pub permissions: Vec<PermissionFlag>,
}
