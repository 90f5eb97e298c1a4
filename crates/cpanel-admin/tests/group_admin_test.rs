//! Integration tests for the group admin controller over in-memory
//! SurrealDB collaborators.

use cpanel_admin::{
    AdminResponse, Flash, GroupAdminController, Messages, PersistentGroupForm, RedirectTarget,
    StoredPermissionCatalog, ViewConfig, ViewContext,
};
use cpanel_core::form::GroupPayload;
use cpanel_core::models::group::CreateGroup;
use cpanel_core::models::permission::{CreatePermission, GENERIC_MODULE};
use cpanel_core::repository::{GroupRepository, PermissionRepository};
use cpanel_db::repository::{SurrealGroupRepository, SurrealPermissionRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

type Controller = GroupAdminController<
    SurrealGroupRepository<Db>,
    PersistentGroupForm<SurrealGroupRepository<Db>>,
    StoredPermissionCatalog<SurrealPermissionRepository<Db>>,
>;

/// Helper: in-memory DB, migrations, seeded permission catalog, and a
/// fully wired controller.
async fn setup() -> (Surreal<Db>, Controller) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    cpanel_db::run_migrations(&db).await.unwrap();

    let permission_repo = SurrealPermissionRepository::new(db.clone());
    for (name, module) in [
        ("view", GENERIC_MODULE),
        ("create", GENERIC_MODULE),
        ("update", GENERIC_MODULE),
        ("delete", GENERIC_MODULE),
        ("users.view", "users"),
        ("users.create", "users"),
    ] {
        permission_repo
            .create(CreatePermission {
                name: name.into(),
                module: module.into(),
            })
            .await
            .unwrap();
    }

    let controller = GroupAdminController::new(
        SurrealGroupRepository::new(db.clone()),
        PersistentGroupForm::new(SurrealGroupRepository::new(db.clone())),
        StoredPermissionCatalog::new(permission_repo),
        ViewConfig::default(),
        Messages::default(),
    );

    (db, controller)
}

fn payload(name: &str, permissions: &[&str]) -> GroupPayload {
    GroupPayload {
        id: None,
        name: name.into(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

#[tokio::test]
async fn index_with_no_groups_renders_empty_collection() {
    let (_db, controller) = setup().await;

    match controller.index().await.unwrap() {
        AdminResponse::View { name, context } => {
            assert_eq!(name, "admin/groups/index");
            match context {
                ViewContext::Index { groups } => assert!(groups.is_empty()),
                other => panic!("wrong context: {other:?}"),
            }
        }
        other => panic!("expected view, got {other:?}"),
    }
}

#[tokio::test]
async fn create_form_merges_fixed_role_against_empty_grants() {
    let (_db, controller) = setup().await;

    match controller.create_form().await.unwrap() {
        AdminResponse::View { name, context } => {
            assert_eq!(name, "admin/groups/create");
            match context {
                ViewContext::Create {
                    generic_permissions,
                    module_permissions,
                } => {
                    assert_eq!(generic_permissions.len(), 1);
                    assert_eq!(generic_permissions[0].role, "generic");
                    let actions: Vec<&str> = generic_permissions[0]
                        .permissions
                        .iter()
                        .map(|f| f.name.as_str())
                        .collect();
                    assert_eq!(actions, vec!["view", "create", "update", "delete"]);
                    assert!(
                        generic_permissions[0].permissions.iter().all(|f| !f.granted),
                        "blank form must grant nothing"
                    );

                    assert_eq!(module_permissions.len(), 1);
                    assert_eq!(module_permissions[0].module, "users");
                    assert!(module_permissions[0].permissions.iter().all(|f| !f.granted));
                }
                other => panic!("wrong context: {other:?}"),
            }
        }
        other => panic!("expected view, got {other:?}"),
    }
}

#[tokio::test]
async fn edit_form_binds_group_and_its_grants() {
    let (db, controller) = setup().await;

    let repo = SurrealGroupRepository::new(db);
    let group = repo
        .create(CreateGroup {
            name: "Moderators".into(),
            permissions: vec!["view".into(), "users.view".into()],
        })
        .await
        .unwrap();

    match controller.edit_form(&group.id.to_string()).await.unwrap() {
        AdminResponse::View { name, context } => {
            assert_eq!(name, "admin/groups/edit");
            match context {
                ViewContext::Edit {
                    group: bound,
                    generic_permissions,
                    module_permissions,
                } => {
                    assert_eq!(bound.id, group.id);
                    let view_flag = &generic_permissions[0].permissions[0];
                    assert_eq!(view_flag.name, "view");
                    assert!(view_flag.granted);

                    let users = &module_permissions[0];
                    assert!(users.permissions.iter().any(|f| f.name == "users.view" && f.granted));
                    assert!(
                        users
                            .permissions
                            .iter()
                            .any(|f| f.name == "users.create" && !f.granted)
                    );
                }
                other => panic!("wrong context: {other:?}"),
            }
        }
        other => panic!("expected view, got {other:?}"),
    }
}

#[tokio::test]
async fn edit_form_unknown_id_redirects_to_index_with_error() {
    let (_db, controller) = setup().await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        match controller.edit_form(&id).await.unwrap() {
            AdminResponse::Redirect { target, flash } => {
                assert_eq!(target, RedirectTarget::GroupsIndex);
                match flash {
                    Flash::Error { message } => assert!(!message.is_empty()),
                    other => panic!("expected error flash, got {other:?}"),
                }
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn store_valid_input_redirects_to_index_with_success() {
    let (db, controller) = setup().await;

    match controller
        .store(payload("Moderators", &["view", "users.view"]))
        .await
        .unwrap()
    {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::GroupsIndex);
            match flash {
                Flash::Success { message } => {
                    assert_eq!(message, "The group was successfully created.");
                }
                other => panic!("expected success flash, got {other:?}"),
            }
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    let repo = SurrealGroupRepository::new(db);
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Moderators");
}

#[tokio::test]
async fn store_invalid_input_redirects_back_with_errors_and_input() {
    let (db, controller) = setup().await;

    match controller
        .store(payload("", &["Bad Permission"]))
        .await
        .unwrap()
    {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::Back);
            match flash {
                Flash::Invalid { errors, old_input } => {
                    assert!(errors.contains_key("name"));
                    assert!(errors.contains_key("permissions"));
                    assert_eq!(old_input.permissions, vec!["Bad Permission"]);
                }
                other => panic!("expected invalid flash, got {other:?}"),
            }
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    // Nothing was written.
    let repo = SurrealGroupRepository::new(db);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn store_duplicate_name_is_a_validation_failure() {
    let (_db, controller) = setup().await;

    controller
        .store(payload("Moderators", &[]))
        .await
        .unwrap();

    match controller.store(payload("Moderators", &[])).await.unwrap() {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::Back);
            match flash {
                Flash::Invalid { errors, .. } => {
                    assert!(errors["name"][0].contains("already exists"));
                }
                other => panic!("expected invalid flash, got {other:?}"),
            }
        }
        other => panic!("expected redirect, got {other:?}"),
    }
}

#[tokio::test]
async fn update_valid_input_updates_exactly_that_group() {
    let (db, controller) = setup().await;

    let repo = SurrealGroupRepository::new(db);
    let editors = repo
        .create(CreateGroup {
            name: "Editors".into(),
            permissions: vec![],
        })
        .await
        .unwrap();
    let bystander = repo
        .create(CreateGroup {
            name: "Writers".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    match controller
        .update(&editors.id.to_string(), payload("Senior Editors", &["view"]))
        .await
        .unwrap()
    {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::GroupsIndex);
            assert!(matches!(flash, Flash::Success { .. }));
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    let updated = repo.find_by_id(editors.id).await.unwrap();
    assert_eq!(updated.name, "Senior Editors");
    assert_eq!(updated.permissions, vec!["view"]);

    let untouched = repo.find_by_id(bystander.id).await.unwrap();
    assert_eq!(untouched.name, "Writers");
}

#[tokio::test]
async fn update_unknown_id_redirects_to_index_regardless_of_input() {
    let (_db, controller) = setup().await;

    // Valid and invalid input alike: the missing id wins.
    for input in [payload("Fine Name", &[]), payload("", &["BAD"])] {
        match controller
            .update(&Uuid::new_v4().to_string(), input)
            .await
            .unwrap()
        {
            AdminResponse::Redirect { target, flash } => {
                assert_eq!(target, RedirectTarget::GroupsIndex);
                match flash {
                    Flash::Error { message } => assert!(!message.is_empty()),
                    other => panic!("expected error flash, got {other:?}"),
                }
            }
            other => panic!("expected redirect, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn update_invalid_input_redirects_back_with_errors() {
    let (db, controller) = setup().await;

    let repo = SurrealGroupRepository::new(db);
    let group = repo
        .create(CreateGroup {
            name: "Editors".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    match controller
        .update(&group.id.to_string(), payload("", &[]))
        .await
        .unwrap()
    {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::Back);
            assert!(matches!(flash, Flash::Invalid { .. }));
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    // The group is untouched.
    let unchanged = repo.find_by_id(group.id).await.unwrap();
    assert_eq!(unchanged.name, "Editors");
}

#[tokio::test]
async fn destroy_existing_group_redirects_to_index_with_success() {
    let (db, controller) = setup().await;

    let repo = SurrealGroupRepository::new(db);
    let group = repo
        .create(CreateGroup {
            name: "Temps".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    match controller.destroy(&group.id.to_string()).await.unwrap() {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::GroupsIndex);
            match flash {
                Flash::Success { message } => {
                    assert_eq!(message, "The group was successfully deleted.");
                }
                other => panic!("expected success flash, got {other:?}"),
            }
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn destroy_unknown_id_redirects_back_and_leaves_store_unchanged() {
    let (db, controller) = setup().await;

    let repo = SurrealGroupRepository::new(db);
    repo.create(CreateGroup {
        name: "Keep".into(),
        permissions: vec![],
    })
    .await
    .unwrap();

    match controller.destroy(&Uuid::new_v4().to_string()).await.unwrap() {
        AdminResponse::Redirect { target, flash } => {
            assert_eq!(target, RedirectTarget::Back);
            assert!(matches!(flash, Flash::Error { .. }));
        }
        other => panic!("expected redirect, got {other:?}"),
    }

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}
