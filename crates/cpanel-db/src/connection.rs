//! SurrealDB connection management.

use surrealdb::engine::local::{Db, Mem};
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use surrealdb::{Connection, Surreal};
use tracing::info;

/// Configuration for connecting to SurrealDB.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`). Ignored in ephemeral mode.
    pub url: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Root username for authentication.
    pub username: String,
    /// Root password for authentication.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            namespace: "cpanel".into(),
            database: "admin".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

/// Manages a connection to SurrealDB, generic over the engine so the
/// same wiring serves a remote server and the embedded in-memory store.
#[derive(Clone)]
pub struct DbManager<C: Connection> {
    db: Surreal<C>,
}

impl DbManager<Client> {
    /// Connect to a remote SurrealDB using the provided configuration.
    ///
    /// Authenticates as root, selects the configured namespace and
    /// database, and returns a ready-to-use manager.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!("Successfully connected to SurrealDB");

        Ok(Self { db })
    }
}

impl DbManager<Db> {
    /// Start an embedded in-memory database. State is lost on exit;
    /// intended for local runs and tests.
    pub async fn ephemeral(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            namespace = %config.namespace,
            database = %config.database,
            "Starting embedded in-memory SurrealDB"
        );

        let db = Surreal::new::<Mem>(()).await?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        Ok(Self { db })
    }
}

impl<C: Connection> DbManager<C> {
    /// Returns a clone of the underlying SurrealDB client handle.
    pub fn client(&self) -> Surreal<C> {
        self.db.clone()
    }
}
