//! Validating, persisting group form.
//!
//! Field rules run through the `validator` derive; the uniqueness rule
//! needs the store and runs after. Every violation found is collected —
//! a submission with three problems reports all three.

use cpanel_core::error::{CpanelError, CpanelResult};
use cpanel_core::form::{FieldErrors, FormOutcome, GroupForm, GroupPayload};
use cpanel_core::models::group::{CreateGroup, UpdateGroup};
use cpanel_core::repository::GroupRepository;
use validator::{Validate, ValidationError, ValidationErrors};

const NAME_TAKEN: &str = "A group with this name already exists.";

#[derive(Debug, Validate)]
struct GroupRules {
    #[validate(
        length(
            min = 1,
            max = 64,
            message = "The name is required and may be at most 64 characters."
        ),
        custom(function = validate_name_chars)
    )]
    name: String,
    #[validate(custom(function = validate_permission_names))]
    permissions: Vec<String>,
}

fn validate_name_chars(name: &str) -> Result<(), ValidationError> {
    let ok = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("name_chars").with_message(
            "The name may only contain letters, numbers, spaces, hyphens and underscores."
                .into(),
        ))
    }
}

fn validate_permission_names(permissions: &Vec<String>) -> Result<(), ValidationError> {
    for name in permissions {
        let ok = !name.is_empty()
            && name.len() <= 64
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_.:-".contains(c));
        if !ok {
            return Err(ValidationError::new("permission_name").with_message(
                format!("'{name}' is not a valid permission name.").into(),
            ));
        }
    }
    Ok(())
}

fn collect_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => e.code.to_string(),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

/// Run the field rules against a trimmed name + permission list.
fn validate_fields(name: &str, permissions: &[String]) -> FieldErrors {
    let rules = GroupRules {
        name: name.to_owned(),
        permissions: permissions.to_vec(),
    };
    match rules.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => collect_errors(&e),
    }
}

/// Group form backed by a group store: validates, checks name
/// uniqueness, then persists.
pub struct PersistentGroupForm<G> {
    groups: G,
}

impl<G> PersistentGroupForm<G> {
    pub fn new(groups: G) -> Self {
        Self { groups }
    }
}

impl<G: GroupRepository> GroupForm for PersistentGroupForm<G> {
    async fn create(&self, payload: GroupPayload) -> CpanelResult<FormOutcome> {
        let name = payload.name.trim().to_string();

        let mut errors = validate_fields(&name, &payload.permissions);

        // Uniqueness only matters once the name itself is acceptable.
        if !errors.contains_key("name") && self.groups.find_by_name(&name).await?.is_some() {
            errors.insert("name".into(), vec![NAME_TAKEN.into()]);
        }

        if !errors.is_empty() {
            return Ok(FormOutcome::Invalid(errors));
        }

        let group = self
            .groups
            .create(CreateGroup {
                name,
                permissions: payload.permissions,
            })
            .await?;

        Ok(FormOutcome::Saved(group))
    }

    async fn update(&self, payload: GroupPayload) -> CpanelResult<FormOutcome> {
        let id = payload
            .id
            .ok_or_else(|| CpanelError::Internal("update payload missing target id".into()))?;

        // Resolve the target before validating, so a missing group is one
        // NotFound signal no matter which step would have noticed it.
        self.groups.find_by_id(id).await?;

        let name = payload.name.trim().to_string();
        let mut errors = validate_fields(&name, &payload.permissions);

        if !errors.contains_key("name") {
            if let Some(other) = self.groups.find_by_name(&name).await? {
                if other.id != id {
                    errors.insert("name".into(), vec![NAME_TAKEN.into()]);
                }
            }
        }

        if !errors.is_empty() {
            return Ok(FormOutcome::Invalid(errors));
        }

        let group = self
            .groups
            .update(
                id,
                UpdateGroup {
                    name: Some(name),
                    permissions: Some(payload.permissions),
                },
            )
            .await?;

        Ok(FormOutcome::Saved(group))
    }
}
