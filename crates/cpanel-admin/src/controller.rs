//! Group administration controller.
//!
//! Orchestrates the three collaborator seams — group store, group form,
//! permission catalog — and answers every operation with an
//! [`AdminResponse`] directive. The controller performs no algorithmic
//! work of its own: it dispatches, branches on the outcome, and picks
//! one of exactly two redirect targets for every mutation.
//!
//! NotFound and validation failures are always absorbed into redirects
//! here; only storage-layer faults propagate as `Err`.

use cpanel_core::catalog::PermissionCatalog;
use cpanel_core::error::{CpanelError, CpanelResult};
use cpanel_core::form::{FieldErrors, FormOutcome, GroupForm, GroupPayload};
use cpanel_core::models::role::RoleDef;
use cpanel_core::repository::GroupRepository;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::messages::Messages;
use crate::views::{ViewConfig, ViewContext};

/// Where a redirect directive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The group list route.
    GroupsIndex,
    /// The page the request came from.
    Back,
}

/// One-shot notice attached to a redirect. Serializable so the HTTP
/// layer can carry it across the redirect in a cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flash {
    Success { message: String },
    Error { message: String },
    /// Validation failure: field errors plus the submitted input so the
    /// form can be re-populated.
    Invalid {
        errors: FieldErrors,
        old_input: GroupPayload,
    },
}

/// Response directive produced by every controller operation.
#[derive(Debug, Clone)]
pub enum AdminResponse {
    View { name: String, context: ViewContext },
    Redirect { target: RedirectTarget, flash: Flash },
}

impl AdminResponse {
    fn to_index(flash: Flash) -> Self {
        AdminResponse::Redirect {
            target: RedirectTarget::GroupsIndex,
            flash,
        }
    }

    fn back(flash: Flash) -> Self {
        AdminResponse::Redirect {
            target: RedirectTarget::Back,
            flash,
        }
    }
}

/// The group admin resource controller.
///
/// Generic over its collaborators so the orchestration layer carries no
/// dependency on any concrete store, validator, or catalog.
pub struct GroupAdminController<G, F, P> {
    groups: G,
    form: F,
    permissions: P,
    views: ViewConfig,
    messages: Messages,
}

impl<G, F, P> GroupAdminController<G, F, P>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    pub fn new(groups: G, form: F, permissions: P, views: ViewConfig, messages: Messages) -> Self {
        Self {
            groups,
            form,
            permissions,
            views,
            messages,
        }
    }

    /// Display all the groups.
    pub async fn index(&self) -> CpanelResult<AdminResponse> {
        let groups = self.groups.find_all().await?;
        Ok(AdminResponse::View {
            name: self.views.groups_index.clone(),
            context: ViewContext::Index { groups },
        })
    }

    /// Display the create-group form: generic permissions for the fixed
    /// CRUD role and module permissions, both against an empty grant set.
    pub async fn create_form(&self) -> CpanelResult<AdminResponse> {
        let roles = [RoleDef::generic()];

        let generic_permissions = self.permissions.merge_role_permissions(&[], &roles).await?;
        let module_permissions = self.permissions.merge_module_permissions(&[]).await?;

        Ok(AdminResponse::View {
            name: self.views.groups_create.clone(),
            context: ViewContext::Create {
                generic_permissions,
                module_permissions,
            },
        })
    }

    /// Display the edit form for one group, with its grants merged in.
    /// An unresolvable id redirects to the list with an error notice.
    pub async fn edit_form(&self, id: &str) -> CpanelResult<AdminResponse> {
        let group_id = match self.parse_id(id) {
            Ok(gid) => gid,
            Err(e) => return Ok(self.absorb_not_found(e, RedirectTarget::GroupsIndex)),
        };

        let group = match self.groups.find_by_id(group_id).await {
            Ok(g) => g,
            Err(e @ CpanelError::NotFound { .. }) => {
                return Ok(self.absorb_not_found(e, RedirectTarget::GroupsIndex));
            }
            Err(e) => return Err(e),
        };

        let roles = [RoleDef::generic()];
        let generic_permissions = self
            .permissions
            .merge_role_permissions(&group.permissions, &roles)
            .await?;
        let module_permissions = self
            .permissions
            .merge_module_permissions(&group.permissions)
            .await?;

        Ok(AdminResponse::View {
            name: self.views.groups_edit.clone(),
            context: ViewContext::Edit {
                group,
                generic_permissions,
                module_permissions,
            },
        })
    }

    /// Store a newly created group.
    pub async fn store(&self, payload: GroupPayload) -> CpanelResult<AdminResponse> {
        let submitted = payload.clone();
        match self.form.create(payload).await? {
            FormOutcome::Saved(group) => {
                info!(group_id = %group.id, name = %group.name, "group created");
                Ok(AdminResponse::to_index(Flash::Success {
                    message: self.messages.create_success.clone(),
                }))
            }
            FormOutcome::Invalid(errors) => Ok(AdminResponse::back(Flash::Invalid {
                errors,
                old_input: submitted,
            })),
        }
    }

    /// Update the group identified by the route. The route id wins over
    /// anything in the body.
    pub async fn update(&self, id: &str, mut payload: GroupPayload) -> CpanelResult<AdminResponse> {
        let group_id = match self.parse_id(id) {
            Ok(gid) => gid,
            Err(e) => return Ok(self.absorb_not_found(e, RedirectTarget::GroupsIndex)),
        };
        payload.id = Some(group_id);

        let submitted = payload.clone();
        match self.form.update(payload).await {
            Ok(FormOutcome::Saved(group)) => {
                info!(group_id = %group.id, name = %group.name, "group updated");
                Ok(AdminResponse::to_index(Flash::Success {
                    message: self.messages.update_success.clone(),
                }))
            }
            Ok(FormOutcome::Invalid(errors)) => Ok(AdminResponse::back(Flash::Invalid {
                errors,
                old_input: submitted,
            })),
            Err(e @ CpanelError::NotFound { .. }) => {
                Ok(self.absorb_not_found(e, RedirectTarget::GroupsIndex))
            }
            Err(e) => Err(e),
        }
    }

    /// Remove the group identified by the route.
    pub async fn destroy(&self, id: &str) -> CpanelResult<AdminResponse> {
        let group_id = match self.parse_id(id) {
            Ok(gid) => gid,
            Err(e) => return Ok(self.absorb_not_found(e, RedirectTarget::Back)),
        };

        match self.groups.delete(group_id).await {
            Ok(()) => {
                info!(group_id = %group_id, "group deleted");
                Ok(AdminResponse::to_index(Flash::Success {
                    message: self.messages.delete_success.clone(),
                }))
            }
            Err(e @ CpanelError::NotFound { .. }) => {
                Ok(self.absorb_not_found(e, RedirectTarget::Back))
            }
            Err(e) => Err(e),
        }
    }

    /// An id that does not parse is the same condition as one that does
    /// not resolve: the group is not there.
    fn parse_id(&self, id: &str) -> CpanelResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| CpanelError::group_not_found(id))
    }

    fn absorb_not_found(&self, err: CpanelError, target: RedirectTarget) -> AdminResponse {
        warn!(error = %err, "group lookup failed, redirecting");
        AdminResponse::Redirect {
            target,
            flash: Flash::Error {
                message: err.to_string(),
            },
        }
    }
}
