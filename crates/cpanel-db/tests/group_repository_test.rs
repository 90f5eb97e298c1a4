//! Integration tests for the group repository using in-memory SurrealDB.

use cpanel_core::error::CpanelError;
use cpanel_core::models::group::{CreateGroup, UpdateGroup};
use cpanel_core::repository::GroupRepository;
use cpanel_db::repository::SurrealGroupRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    cpanel_db::run_migrations(&db).await.unwrap();
    db
}

#[tokio::test]
async fn create_and_find_group() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    let group = repo
        .create(CreateGroup {
            name: "Moderators".into(),
            permissions: vec!["view".into(), "users.view".into()],
        })
        .await
        .unwrap();

    assert_eq!(group.name, "Moderators");
    assert_eq!(group.permissions, vec!["view", "users.view"]);

    let fetched = repo.find_by_id(group.id).await.unwrap();
    assert_eq!(fetched.id, group.id);
    assert_eq!(fetched.name, "Moderators");
}

#[tokio::test]
async fn find_by_id_unknown_is_not_found() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    let err = repo.find_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CpanelError::NotFound { .. }));
}

#[tokio::test]
async fn find_by_name_probe() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    assert!(repo.find_by_name("Admins").await.unwrap().is_none());

    let created = repo
        .create(CreateGroup {
            name: "Admins".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    let found = repo.find_by_name("Admins").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn update_group_fields() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    let group = repo
        .create(CreateGroup {
            name: "Editors".into(),
            permissions: vec!["view".into()],
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            group.id,
            UpdateGroup {
                name: Some("Senior Editors".into()),
                permissions: Some(vec!["view".into(), "update".into()]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Senior Editors");
    assert_eq!(updated.permissions, vec!["view", "update"]);

    // Partial update leaves the other field alone.
    let renamed = repo
        .update(
            group.id,
            UpdateGroup {
                name: Some("Editors".into()),
                permissions: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.permissions, vec!["view", "update"]);
}

#[tokio::test]
async fn update_unknown_is_not_found() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    let err = repo
        .update(
            Uuid::new_v4(),
            UpdateGroup {
                name: Some("Ghost".into()),
                permissions: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CpanelError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_group() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    let group = repo
        .create(CreateGroup {
            name: "Temps".into(),
            permissions: vec![],
        })
        .await
        .unwrap();

    repo.delete(group.id).await.unwrap();

    let err = repo.find_by_id(group.id).await.unwrap_err();
    assert!(matches!(err, CpanelError::NotFound { .. }));
}

#[tokio::test]
async fn delete_unknown_is_not_found_and_store_unchanged() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    repo.create(CreateGroup {
        name: "Keep".into(),
        permissions: vec![],
    })
    .await
    .unwrap();

    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CpanelError::NotFound { .. }));

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn find_all_empty_and_ordered() {
    let db = setup().await;
    let repo = SurrealGroupRepository::new(db);

    assert!(repo.find_all().await.unwrap().is_empty());

    for name in ["Writers", "Admins", "Moderators"] {
        repo.create(CreateGroup {
            name: name.into(),
            permissions: vec![],
        })
        .await
        .unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Admins", "Moderators", "Writers"]);
}
