//! Cpanel admin server — application entry point.

use std::sync::Arc;

use clap::Parser;
use cpanel_admin::http::AppState;
use cpanel_admin::{
    GroupAdminController, JsonViewRenderer, Messages, PersistentGroupForm,
    StoredPermissionCatalog, ViewConfig,
};
use cpanel_core::models::permission::{CreatePermission, GENERIC_MODULE};
use cpanel_core::repository::PermissionRepository;
use cpanel_db::repository::{SurrealGroupRepository, SurrealPermissionRepository};
use cpanel_db::{DbConfig, DbManager};
use surrealdb::{Connection, Surreal};
use tracing::info;

/// CLI arguments for the admin server.
#[derive(Parser, Debug)]
#[command(name = "cpanel-server", about = "Cpanel group administration server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "CPANEL_LISTEN", default_value = "127.0.0.1:8080")]
    listen: String,

    /// SurrealDB WebSocket URL.
    #[arg(long, env = "CPANEL_DB_URL", default_value = "127.0.0.1:8000")]
    db_url: String,

    /// SurrealDB namespace.
    #[arg(long, env = "CPANEL_DB_NAMESPACE", default_value = "cpanel")]
    db_namespace: String,

    /// SurrealDB database name.
    #[arg(long, env = "CPANEL_DB_DATABASE", default_value = "admin")]
    db_database: String,

    /// SurrealDB root username.
    #[arg(long, env = "CPANEL_DB_USERNAME", default_value = "root")]
    db_username: String,

    /// SurrealDB root password.
    #[arg(long, env = "CPANEL_DB_PASSWORD", default_value = "root")]
    db_password: String,

    /// Run against an embedded in-memory database instead of a remote
    /// SurrealDB. State is lost on exit.
    #[arg(long, default_value_t = false)]
    ephemeral: bool,
}

impl Args {
    fn db_config(&self) -> DbConfig {
        DbConfig {
            url: self.db_url.clone(),
            namespace: self.db_namespace.clone(),
            database: self.db_database.clone(),
            username: self.db_username.clone(),
            password: self.db_password.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cpanel=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let config = args.db_config();

    info!(listen = %args.listen, ephemeral = args.ephemeral, "starting cpanel-server");

    if args.ephemeral {
        let manager = DbManager::ephemeral(&config).await?;
        serve(manager.client(), &args.listen).await
    } else {
        let manager = DbManager::connect(&config).await?;
        serve(manager.client(), &args.listen).await
    }
}

async fn serve<C: Connection + 'static>(
    db: Surreal<C>,
    listen: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("running database migrations");
    cpanel_db::run_migrations(&db).await?;

    seed_permission_catalog(&SurrealPermissionRepository::new(db.clone())).await?;

    let controller = GroupAdminController::new(
        SurrealGroupRepository::new(db.clone()),
        PersistentGroupForm::new(SurrealGroupRepository::new(db.clone())),
        StoredPermissionCatalog::new(SurrealPermissionRepository::new(db)),
        ViewConfig::default(),
        Messages::default(),
    );

    let state = AppState {
        controller: Arc::new(controller),
        renderer: Arc::new(JsonViewRenderer),
    };

    let app = cpanel_admin::http::router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutdown signal received");
        })
        .await?;

    info!("cpanel-server stopped");
    Ok(())
}

/// First-run seeding: the generic CRUD actions plus the default module
/// permissions the admin panel ships with.
async fn seed_permission_catalog<P: PermissionRepository>(
    repo: &P,
) -> Result<(), Box<dyn std::error::Error>> {
    if !repo.find_all().await?.is_empty() {
        return Ok(());
    }

    info!("seeding permission catalog");
    for (name, module) in [
        ("view", GENERIC_MODULE),
        ("create", GENERIC_MODULE),
        ("update", GENERIC_MODULE),
        ("delete", GENERIC_MODULE),
        ("users.view", "users"),
        ("users.create", "users"),
        ("users.update", "users"),
        ("users.delete", "users"),
        ("groups.view", "groups"),
        ("groups.create", "groups"),
        ("groups.update", "groups"),
        ("groups.delete", "groups"),
    ] {
        repo.create(CreatePermission {
            name: name.into(),
            module: module.into(),
        })
        .await?;
    }

    Ok(())
}
