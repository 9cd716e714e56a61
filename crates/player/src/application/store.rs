//! Template store - the working template plus the saved-template library
//!
//! The store starts in [`StoreState::Loading`] and refuses to write anything
//! until [`TemplateStore::initialize`] has read both persisted slices. Writing
//! earlier would overwrite real data with the defaults the store starts with.

use serde::de::DeserializeOwned;
use tmplbldr_domain::{
    summarize, Equipment, EquipmentEdit, EquipmentId, SavedTemplate, Skill, SkillEdit, SkillId,
    Template, TemplateId, TemplateLibrary, TemplateSummary,
};
use tmplbldr_shared::{decode, strip_share_token, token_from_url};

use super::error::StorageReadError;
use super::messages;
use crate::ports::outbound::storage_keys;
use crate::state::Platform;

/// Store lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Persisted slices not read yet; writes are refused
    Loading,
    /// Every change is written back
    Ready,
}

/// Process-wide editor state
pub struct TemplateStore {
    pub(super) platform: Platform,
    state: StoreState,
    pub(super) working: Template,
    pub(super) current_id: Option<TemplateId>,
    pub(super) library: TemplateLibrary,
    pub(super) name_error: Option<String>,
}

impl TemplateStore {
    /// A store holding defaults, not yet initialized
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            state: StoreState::Loading,
            working: Template::default(),
            current_id: None,
            library: TemplateLibrary::new(),
            name_error: None,
        }
    }

    /// Create and initialize a store
    pub fn open(platform: Platform) -> Self {
        let mut store = Self::new(platform);
        store.initialize();
        store
    }

    /// Read persisted state, adopt a shared template from the page address,
    /// then start writing changes back.
    ///
    /// Runs once; later calls are ignored.
    pub fn initialize(&mut self) {
        if self.state == StoreState::Ready {
            tracing::debug!("Template store already initialized");
            return;
        }

        self.working = match self.read_slice::<Template>(storage_keys::WORKING_TEMPLATE) {
            Ok(mut template) => {
                template.ensure_unique_ids();
                template
            }
            Err(e) => {
                log_read_error(&e);
                Template::default()
            }
        };

        self.library = match self.read_slice::<TemplateLibrary>(storage_keys::SAVED_TEMPLATES) {
            Ok(library) => library,
            Err(e) => {
                log_read_error(&e);
                TemplateLibrary::new()
            }
        };

        self.adopt_shared_template();

        self.state = StoreState::Ready;
        tracing::info!(
            saved_templates = self.library.len(),
            "Template store ready"
        );

        self.persist_working();
        self.persist_library();
    }

    fn read_slice<T: DeserializeOwned>(&self, key: &'static str) -> Result<T, StorageReadError> {
        let raw = self
            .platform
            .storage_load(key)
            .ok_or(StorageReadError::Missing(key))?;
        serde_json::from_str(&raw).map_err(|source| StorageReadError::Malformed { key, source })
    }

    /// Replace the working template with one carried in the page address.
    ///
    /// A bad token leaves state and address untouched.
    fn adopt_shared_template(&mut self) {
        let Some(url) = self.platform.current_url() else {
            return;
        };
        let Some(token) = token_from_url(&url) else {
            return;
        };

        match decode(&token) {
            Ok(template) => {
                tracing::info!(name = %template.name, "Adopting shared template");
                self.working = template;
                self.current_id = None;
                self.platform.replace_url(&strip_share_token(&url));
                self.platform.notify_success(messages::SHARED_LOADED);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load shared template");
                self.platform.notify_error(messages::SHARED_LOAD_FAILED);
            }
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub(super) fn persist_working(&self) {
        self.persist(storage_keys::WORKING_TEMPLATE, &self.working);
    }

    pub(super) fn persist_library(&self) {
        self.persist(storage_keys::SAVED_TEMPLATES, &self.library);
    }

    fn persist<T: serde::Serialize>(&self, key: &str, value: &T) {
        if self.state == StoreState::Loading {
            tracing::debug!(key, "Store still loading; write skipped");
            return;
        }

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize slice");
                return;
            }
        };

        if let Err(e) = self.platform.storage_save(key, &json) {
            tracing::error!(key, error = %e, "Failed to persist slice");
            self.platform.notify_error(messages::PERSIST_FAILED);
        }
    }

    /// Reset the working template to empty slots with no identity
    pub(super) fn reset_working(&mut self) {
        self.working = Template::default();
        self.current_id = None;
        self.persist_working();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == StoreState::Ready
    }

    pub fn template(&self) -> &Template {
        &self.working
    }

    pub fn template_name(&self) -> &str {
        &self.working.name
    }

    pub fn skills(&self) -> &[Skill] {
        &self.working.skills
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.working.equipment
    }

    /// Id of the saved template the working template is bound to
    pub fn current_id(&self) -> Option<TemplateId> {
        self.current_id
    }

    /// Inline error for the template name field
    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    pub fn clear_name_error(&mut self) {
        self.name_error = None;
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn saved_templates(&self) -> &[SavedTemplate] {
        self.library.list()
    }

    /// Summary table for the working template, recomputed on every call
    pub fn summary(&self) -> TemplateSummary {
        summarize(&self.working.skills, &self.working.equipment)
    }

    // =========================================================================
    // Editing intents
    // =========================================================================

    pub fn set_template_name(&mut self, name: impl Into<String>) {
        self.working.name = name.into();
        self.persist_working();
    }

    pub fn add_skill(&mut self) -> SkillId {
        let skill = Skill::empty();
        let id = skill.id;
        self.working.skills.push(skill);
        self.persist_working();
        id
    }

    /// Apply a field edit; unknown ids are ignored.
    pub fn update_skill(&mut self, id: SkillId, edit: SkillEdit) {
        let Some(skill) = self.working.skill_mut(id) else {
            tracing::debug!(%id, "Edit for unknown skill ignored");
            return;
        };
        skill.apply(edit);
        self.persist_working();
    }

    pub fn remove_skill(&mut self, id: SkillId) {
        let before = self.working.skills.len();
        self.working.skills.retain(|s| s.id != id);
        if self.working.skills.len() != before {
            self.persist_working();
        }
    }

    pub fn add_equipment(&mut self) -> EquipmentId {
        let item = Equipment::empty();
        let id = item.id;
        self.working.equipment.push(item);
        self.persist_working();
        id
    }

    /// Apply a field edit; unknown ids are ignored.
    pub fn update_equipment(&mut self, id: EquipmentId, edit: EquipmentEdit) {
        let Some(item) = self.working.equipment_mut(id) else {
            tracing::debug!(%id, "Edit for unknown equipment ignored");
            return;
        };
        item.apply(edit);
        self.persist_working();
    }

    pub fn remove_equipment(&mut self, id: EquipmentId) {
        let before = self.working.equipment.len();
        self.working.equipment.retain(|e| e.id != id);
        if self.working.equipment.len() != before {
            self.persist_working();
        }
    }
}

fn log_read_error(error: &StorageReadError) {
    match error {
        StorageReadError::Missing(key) => tracing::debug!(key, "Nothing stored; using defaults"),
        StorageReadError::Malformed { .. } => {
            tracing::warn!(error = %error, "Stored data unreadable; using defaults")
        }
    }
}
