//! Error types for the cpanel system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CpanelError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CpanelError {
    /// Shorthand for a group-scoped not-found error.
    pub fn group_not_found(id: impl Into<String>) -> Self {
        CpanelError::NotFound {
            entity: "group".into(),
            id: id.into(),
        }
    }
}

pub type CpanelResult<T> = Result<T, CpanelError>;
