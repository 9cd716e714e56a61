//! User-facing notification and prompt texts

pub const SAVED: &str = "Template saved successfully!";
pub const NAME_REQUIRED_TOAST: &str = "Please enter a template name.";
pub const NAME_REQUIRED: &str = "Template name is required.";
pub const CLEARED: &str = "Template cleared.";
pub const DELETED: &str = "Template deleted.";
pub const DUPLICATED: &str = "Template duplicated! (Unsaved)";
pub const SHARE_COPIED: &str = "Share URL copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy URL.";
pub const SHARED_LOADED: &str = "Shared template loaded!";
pub const SHARED_LOAD_FAILED: &str = "Failed to load shared template.";
pub const PERSIST_FAILED: &str = "Failed to save changes to storage.";

pub const CONFIRM_CLEAR: &str = "Clear current template? Unsaved changes will be lost.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this template?";

pub fn loaded(name: &str) -> String {
    format!("Loaded template: {name}")
}

pub fn saved_share_copied(name: &str) -> String {
    format!("Share URL for \"{name}\" copied!")
}
