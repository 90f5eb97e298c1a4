//! Domain models for cpanel.
//!
//! These are the core types shared across all crates.

pub mod group;
pub mod permission;
pub mod role;
