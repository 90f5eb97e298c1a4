//! Permission merging contract.
//!
//! The admin views need the permission catalog folded against a group's
//! granted names, in two shapes: role-scoped (the fixed generic CRUD
//! actions) and module-scoped (everything else, grouped per module).

use crate::error::CpanelResult;
use crate::models::role::{ModulePermissionView, RoleDef, RolePermissionView};

pub trait PermissionCatalog: Send + Sync {
    /// Merge the granted names against ad hoc role definitions. One view
    /// per role, flags in the role's action order.
    fn merge_role_permissions(
        &self,
        granted: &[String],
        roles: &[RoleDef],
    ) -> impl Future<Output = CpanelResult<Vec<RolePermissionView>>> + Send;

    /// Merge the granted names against the stored catalog, excluding the
    /// generic module. One view per module, modules sorted by name.
    fn merge_module_permissions(
        &self,
        granted: &[String],
    ) -> impl Future<Output = CpanelResult<Vec<ModulePermissionView>>> + Send;
}
