//! Permission merging backed by the stored catalog.

use std::collections::HashSet;

use cpanel_core::catalog::PermissionCatalog;
use cpanel_core::error::CpanelResult;
use cpanel_core::models::permission::GENERIC_MODULE;
use cpanel_core::models::role::{
    ModulePermissionView, PermissionFlag, RoleDef, RolePermissionView,
};
use cpanel_core::repository::PermissionRepository;

/// Merges grant sets against ad hoc roles and the stored module catalog.
pub struct StoredPermissionCatalog<P> {
    permissions: P,
}

impl<P> StoredPermissionCatalog<P> {
    pub fn new(permissions: P) -> Self {
        Self { permissions }
    }
}

impl<P: PermissionRepository> PermissionCatalog for StoredPermissionCatalog<P> {
    async fn merge_role_permissions(
        &self,
        granted: &[String],
        roles: &[RoleDef],
    ) -> CpanelResult<Vec<RolePermissionView>> {
        let granted: HashSet<&str> = granted.iter().map(String::as_str).collect();

        let views = roles
            .iter()
            .map(|role| RolePermissionView {
                role: role.name.clone(),
                permissions: role
                    .actions
                    .iter()
                    .map(|action| PermissionFlag {
                        name: action.clone(),
                        granted: granted.contains(action.as_str()),
                    })
                    .collect(),
            })
            .collect();

        Ok(views)
    }

    async fn merge_module_permissions(
        &self,
        granted: &[String],
    ) -> CpanelResult<Vec<ModulePermissionView>> {
        let granted: HashSet<&str> = granted.iter().map(String::as_str).collect();

        // Catalog order is module asc, creation asc; fold adjacent rows
        // of the same module into one view.
        let mut views: Vec<ModulePermissionView> = Vec::new();
        for permission in self.permissions.find_all().await? {
            if permission.module == GENERIC_MODULE {
                continue;
            }
            let flag = PermissionFlag {
                granted: granted.contains(permission.name.as_str()),
                name: permission.name,
            };
            let same_module = views
                .last()
                .is_some_and(|view| view.module == permission.module);
            if !same_module {
                views.push(ModulePermissionView {
                    module: permission.module,
                    permissions: Vec::new(),
                });
            }
            if let Some(view) = views.last_mut() {
                view.permissions.push(flag);
            }
        }

        Ok(views)
    }
}
