//! Group form contract — validation plus persistence in one step.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CpanelResult;
use crate::models::group::Group;

/// Field name mapped to its validation error messages, in the order the
/// validator reported them. BTreeMap keeps rendering deterministic.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Submitted group form input, as decoded from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupPayload {
    /// Target group for updates; merged in from the route by the
    /// controller, never taken from the body.
    #[serde(skip_deserializing)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Result of a form create/update attempt.
///
/// `NotFound` (update target missing) travels as an `Err`, not as a
/// variant here: the caller redirects somewhere else entirely for it.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    Saved(Group),
    Invalid(FieldErrors),
}

pub trait GroupForm: Send + Sync {
    /// Validate and persist a new group.
    fn create(&self, payload: GroupPayload) -> impl Future<Output = CpanelResult<FormOutcome>> + Send;
    /// Validate and persist changes to the group named by `payload.id`.
    /// Fails with `NotFound` when the target does not resolve.
    fn update(&self, payload: GroupPayload) -> impl Future<Output = CpanelResult<FormOutcome>> + Send;
}
