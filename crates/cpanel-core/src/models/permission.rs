//! Permission catalog entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Module name reserved for the generic CRUD actions
/// (`view`, `create`, `update`, `delete`).
pub const GENERIC_MODULE: &str = "generic";

/// A permission known to the system. Generic actions live under the
/// [`GENERIC_MODULE`] module; everything else is a module permission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    /// Unique permission name (e.g., `users.create`).
    pub name: String,
    /// Application module this permission belongs to.
    pub module: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePermission {
    pub name: String,
    pub module: String,
}
