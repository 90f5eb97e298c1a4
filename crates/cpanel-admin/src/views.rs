//! View identifiers, per-view context, and the rendering seam.

use cpanel_core::error::{CpanelError, CpanelResult};
use cpanel_core::models::group::Group;
use cpanel_core::models::role::{ModulePermissionView, RolePermissionView};
use serde::Serialize;

use crate::controller::Flash;

/// Template identifiers for the group views. The controller never
/// hard-codes a view name; deployments remap them here.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub groups_index: String,
    pub groups_create: String,
    pub groups_edit: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            groups_index: "admin/groups/index".into(),
            groups_create: "admin/groups/create".into(),
            groups_edit: "admin/groups/edit".into(),
        }
    }
}

/// Data bound to a rendered view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "page")]
pub enum ViewContext {
    Index {
        groups: Vec<Group>,
    },
    Create {
        generic_permissions: Vec<RolePermissionView>,
        module_permissions: Vec<ModulePermissionView>,
    },
    Edit {
        group: Group,
        generic_permissions: Vec<RolePermissionView>,
        module_permissions: Vec<ModulePermissionView>,
    },
}

/// Rendering seam. Template engines are out of scope for this module;
/// implementors turn a view name plus its context into a response body.
pub trait ViewRenderer: Send + Sync {
    fn render(
        &self,
        name: &str,
        flash: Option<&Flash>,
        context: &ViewContext,
    ) -> CpanelResult<String>;

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

/// Default renderer: serializes the view name, any pending flash, and
/// the bound context to a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(
        &self,
        name: &str,
        flash: Option<&Flash>,
        context: &ViewContext,
    ) -> CpanelResult<String> {
        let doc = serde_json::json!({
            "view": name,
            "flash": flash,
            "context": context,
        });
        serde_json::to_string(&doc).map_err(|e| CpanelError::Internal(e.to_string()))
    }
}
