//! SurrealDB repository implementations.

mod group;
mod permission;

pub use group::SurrealGroupRepository;
pub use permission::SurrealPermissionRepository;
