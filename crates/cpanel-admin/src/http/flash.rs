//! Flash cookie — carries a one-shot notice (or validation errors plus
//! the submitted input) across a redirect.
//!
//! The flash is JSON-serialized and base64-encoded so arbitrary message
//! text survives cookie value rules. GET handlers take and clear it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use cpanel_core::error::{CpanelError, CpanelResult};
use time::Duration;

use crate::controller::Flash;

/// Cookie name for the pending flash.
pub const FLASH_COOKIE: &str = "cpanel_flash";

/// Build the flash cookie for a redirect response.
pub fn flash_cookie(flash: &Flash) -> CpanelResult<Cookie<'static>> {
    let json = serde_json::to_vec(flash).map_err(|e| CpanelError::Internal(e.to_string()))?;
    let value = URL_SAFE_NO_PAD.encode(json);

    Ok(Cookie::build((FLASH_COOKIE.to_string(), value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/admin".to_string())
        .max_age(Duration::minutes(5))
        .build())
}

/// Take the pending flash, clearing the cookie. An unreadable cookie is
/// dropped silently; a stale or tampered flash is not worth a 500.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| URL_SAFE_NO_PAD.decode(cookie.value()).ok())
        .and_then(|json| serde_json::from_slice(&json).ok());

    let jar = jar.remove(
        Cookie::build((FLASH_COOKIE.to_string(), String::new()))
            .path("/admin".to_string())
            .build(),
    );

    (jar, flash)
}
