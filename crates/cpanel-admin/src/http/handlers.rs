//! Request handlers for the group admin routes.
//!
//! Each handler hands the decoded request to the controller and maps
//! the resulting directive onto an HTTP response: views become 200
//! bodies via the configured renderer, redirects become 303s with the
//! flash parked in a cookie.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::Form;
use axum_extra::extract::cookie::CookieJar;
use cpanel_core::catalog::PermissionCatalog;
use cpanel_core::form::{GroupForm, GroupPayload};
use cpanel_core::repository::GroupRepository;

use crate::controller::{AdminResponse, Flash, RedirectTarget};

use super::error::AdminResult;
use super::flash;
use super::{AppState, GROUPS_INDEX_PATH};

/// Resolve a redirect target to a Location. `Back` follows the Referer
/// header and falls back to the group list.
fn redirect_location(target: RedirectTarget, headers: &HeaderMap) -> String {
    match target {
        RedirectTarget::GroupsIndex => GROUPS_INDEX_PATH.to_string(),
        RedirectTarget::Back => headers
            .get(header::REFERER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(GROUPS_INDEX_PATH)
            .to_string(),
    }
}

/// Map a controller directive onto a response, attaching any pending
/// flash to views and parking redirect flashes in the cookie jar.
fn respond<G, F, P>(
    state: &AppState<G, F, P>,
    jar: CookieJar,
    headers: &HeaderMap,
    pending: Option<Flash>,
    response: AdminResponse,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    match response {
        AdminResponse::View { name, context } => {
            let body = state.renderer.render(&name, pending.as_ref(), &context)?;
            let response = (
                [(header::CONTENT_TYPE, state.renderer.content_type())],
                body,
            )
                .into_response();
            Ok((jar, response))
        }
        AdminResponse::Redirect { target, flash } => {
            let jar = jar.add(flash::flash_cookie(&flash)?);
            let location = redirect_location(target, headers);
            Ok((jar, Redirect::to(&location).into_response()))
        }
    }
}

/// `GET /admin/groups` — list all groups.
pub async fn index<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let (jar, pending) = flash::take_flash(jar);
    let response = state.controller.index().await?;
    respond(&state, jar, &headers, pending, response)
}

/// `GET /admin/groups/new` — create-group form.
pub async fn new_form<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let (jar, pending) = flash::take_flash(jar);
    let response = state.controller.create_form().await?;
    respond(&state, jar, &headers, pending, response)
}

/// `GET /admin/groups/{id}/edit` — edit-group form.
pub async fn edit_form<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let (jar, pending) = flash::take_flash(jar);
    let response = state.controller.edit_form(&id).await?;
    respond(&state, jar, &headers, pending, response)
}

/// `POST /admin/groups` — store a new group.
pub async fn store<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(payload): Form<GroupPayload>,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let response = state.controller.store(payload).await?;
    respond(&state, jar, &headers, None, response)
}

/// `POST /admin/groups/{id}` — update a group.
pub async fn update<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(payload): Form<GroupPayload>,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let response = state.controller.update(&id, payload).await?;
    respond(&state, jar, &headers, None, response)
}

/// `POST /admin/groups/{id}/delete` — remove a group.
pub async fn destroy<G, F, P>(
    State(state): State<AppState<G, F, P>>,
    jar: CookieJar,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AdminResult<(CookieJar, Response)>
where
    G: GroupRepository,
    F: GroupForm,
    P: PermissionCatalog,
{
    let response = state.controller.destroy(&id).await?;
    respond(&state, jar, &headers, None, response)
}
