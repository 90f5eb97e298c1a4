//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. `NotFound` is the only
//! recoverable failure these traits signal; anything else is a
//! storage-layer fault.

use uuid::Uuid;

use crate::error::CpanelResult;
use crate::models::group::{CreateGroup, Group, UpdateGroup};
use crate::models::permission::{CreatePermission, Permission};

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

pub trait GroupRepository: Send + Sync {
    fn create(&self, input: CreateGroup) -> impl Future<Output = CpanelResult<Group>> + Send;
    fn find_by_id(&self, id: Uuid) -> impl Future<Output = CpanelResult<Group>> + Send;
    /// Uniqueness probe; `None` when no group carries the name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = CpanelResult<Option<Group>>> + Send;
    fn update(
        &self,
        id: Uuid,
        input: UpdateGroup,
    ) -> impl Future<Output = CpanelResult<Group>> + Send;
    /// Removes the group, or fails with `NotFound` when the id does not
    /// resolve. The store is left unchanged on failure.
    fn delete(&self, id: Uuid) -> impl Future<Output = CpanelResult<()>> + Send;
    /// All groups, possibly empty.
    fn find_all(&self) -> impl Future<Output = CpanelResult<Vec<Group>>> + Send;
}

// ---------------------------------------------------------------------------
// Permission catalog storage
// ---------------------------------------------------------------------------

pub trait PermissionRepository: Send + Sync {
    fn create(
        &self,
        input: CreatePermission,
    ) -> impl Future<Output = CpanelResult<Permission>> + Send;
    /// The whole catalog, ordered by module then creation time.
    fn find_all(&self) -> impl Future<Output = CpanelResult<Vec<Permission>>> + Send;
    fn find_by_module(
        &self,
        module: &str,
    ) -> impl Future<Output = CpanelResult<Vec<Permission>>> + Send;
}
