//! Cpanel Core — domain models and the trait seams the group
//! administration module is built around.
//!
//! This crate defines:
//! - Domain models ([`models`])
//! - Error types ([`error`])
//! - Persistence traits ([`repository`])
//! - The group form contract ([`form`])
//! - The permission merging contract ([`catalog`])

pub mod catalog;
pub mod error;
pub mod form;
pub mod models;
pub mod repository;

pub use error::{CpanelError, CpanelResult};
