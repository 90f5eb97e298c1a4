//! Cpanel Admin — the group administration module.
//!
//! The centerpiece is [`GroupAdminController`]: a resource controller
//! that orchestrates a group store, a validating form, and a permission
//! catalog, and answers every request with a view or redirect
//! directive. The `http` module maps the six resource routes onto it.

pub mod catalog;
pub mod controller;
pub mod form;
pub mod http;
pub mod messages;
pub mod views;

pub use catalog::StoredPermissionCatalog;
pub use controller::{AdminResponse, Flash, GroupAdminController, RedirectTarget};
pub use form::PersistentGroupForm;
pub use messages::Messages;
pub use views::{JsonViewRenderer, ViewConfig, ViewContext, ViewRenderer};
