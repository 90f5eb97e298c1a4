//! HTTP layer — resource routes for the group admin module.

pub mod error;
pub mod flash;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use cpanel_core::catalog::PermissionCatalog;
use cpanel_core::form::GroupForm;
use cpanel_core::repository::GroupRepository;
use tower_http::trace::TraceLayer;

use crate::controller::GroupAdminController;
use crate::views::ViewRenderer;

pub use error::{AdminError, AdminResult};

/// Canonical path of the group list route; redirects land here.
pub const GROUPS_INDEX_PATH: &str = "/admin/groups";

/// Shared application state passed to all handlers.
pub struct AppState<G, F, P> {
    pub controller: Arc<GroupAdminController<G, F, P>>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl<G, F, P> Clone for AppState<G, F, P> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

/// Builds the Axum router with the six resource routes and shared state.
pub fn router<G, F, P>(state: AppState<G, F, P>) -> Router
where
    G: GroupRepository + 'static,
    F: GroupForm + 'static,
    P: PermissionCatalog + 'static,
{
    Router::new()
        .route(
            "/admin/groups",
            get(handlers::index::<G, F, P>).post(handlers::store::<G, F, P>),
        )
        .route("/admin/groups/new", get(handlers::new_form::<G, F, P>))
        .route(
            "/admin/groups/{id}/edit",
            get(handlers::edit_form::<G, F, P>),
        )
        .route("/admin/groups/{id}", post(handlers::update::<G, F, P>))
        .route(
            "/admin/groups/{id}/delete",
            post(handlers::destroy::<G, F, P>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
