//! SurrealDB implementation of [`GroupRepository`].

use chrono::{DateTime, Utc};
use cpanel_core::error::CpanelResult;
use cpanel_core::models::group::{CreateGroup, Group, UpdateGroup};
use cpanel_core::repository::GroupRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct GroupRow {
    name: String,
    permissions: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct GroupRowWithId {
    record_id: String,
    name: String,
    permissions: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl GroupRowWithId {
    fn try_into_group(self) -> Result<Group, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Migration(format!("invalid UUID: {e}")))?;
        Ok(Group {
            id,
            name: self.name,
            permissions: self.permissions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the group store.
#[derive(Clone)]
pub struct SurrealGroupRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealGroupRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn exists(&self, id_str: &str) -> Result<bool, DbError> {
        let mut check = self
            .db
            .query(
                "SELECT count() AS total FROM group \
                 WHERE id = type::record('group', $id) GROUP ALL",
            )
            .bind(("id", id_str.to_owned()))
            .await?;
        let rows: Vec<CountRow> = check.take(0)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0) > 0)
    }
}

impl<C: Connection> GroupRepository for SurrealGroupRepository<C> {
    async fn create(&self, input: CreateGroup) -> CpanelResult<Group> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('group', $id) SET \
                 name = $name, permissions = $permissions",
            )
            .bind(("id", id_str.clone()))
            .bind(("name", input.name))
            .bind(("permissions", input.permissions))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<GroupRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "group".into(),
            id: id_str,
        })?;

        Ok(Group {
            id,
            name: row.name,
            permissions: row.permissions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> CpanelResult<Group> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('group', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GroupRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "group".into(),
            id: id_str,
        })?;

        Ok(Group {
            id,
            name: row.name,
            permissions: row.permissions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn find_by_name(&self, name: &str) -> CpanelResult<Option<Group>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM group \
                 WHERE name = $name LIMIT 1",
            )
            .bind(("name", name.to_owned()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GroupRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_group()?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: Uuid, input: UpdateGroup) -> CpanelResult<Group> {
        let id_str = id.to_string();

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.permissions.is_some() {
            sets.push("permissions = $permissions");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('group', $id) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("id", id_str.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(permissions) = input.permissions {
            builder = builder.bind(("permissions", permissions));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result
            .check()
            .map_err(|e| DbError::Migration(e.to_string()))?;

        let rows: Vec<GroupRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "group".into(),
            id: id_str,
        })?;

        Ok(Group {
            id,
            name: row.name,
            permissions: row.permissions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn delete(&self, id: Uuid) -> CpanelResult<()> {
        let id_str = id.to_string();

        // A missing id must surface as NotFound with the store untouched.
        if !self.exists(&id_str).await? {
            return Err(DbError::NotFound {
                entity: "group".into(),
                id: id_str,
            }
            .into());
        }

        self.db
            .query("DELETE type::record('group', $id)")
            .bind(("id", id_str))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn find_all(&self) -> CpanelResult<Vec<Group>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM group \
                 ORDER BY name ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<GroupRowWithId> = result.take(0).map_err(DbError::from)?;

        let groups = rows
            .into_iter()
            .map(|row| row.try_into_group())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(groups)
    }
}
