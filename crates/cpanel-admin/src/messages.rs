//! Notice catalog for the group admin module.
//!
//! Stand-in for a localization layer: every human-readable success
//! notice the controller emits is looked up here, so a deployment can
//! swap the strings without touching control flow. Error notices carry
//! the originating error's own message instead.

/// Localized notices for group administration.
#[derive(Debug, Clone)]
pub struct Messages {
    pub create_success: String,
    pub update_success: String,
    pub delete_success: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            create_success: "The group was successfully created.".into(),
            update_success: "The group was successfully updated.".into(),
            delete_success: "The group was successfully deleted.".into(),
        }
    }
}
