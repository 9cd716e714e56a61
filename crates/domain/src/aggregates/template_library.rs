//! Template library aggregate - the collection of saved templates
//!
//! Templates are matched by name case-insensitively after trimming. Saving
//! under a name that already exists overwrites that entry instead of adding
//! a second one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::names_match;
use crate::entities::{SavedTemplate, Template};
use crate::{DomainError, TemplateId};

/// Where a save lands in the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget {
    /// The working template's own entry; no other entry has the name
    Existing(TemplateId),
    /// Another entry already has the name and is overwritten.
    ///
    /// `orphaned` is the working template's previous identity when the save
    /// moved off it; that entry is left untouched.
    Overwrite {
        id: TemplateId,
        orphaned: Option<TemplateId>,
    },
    /// No identity and no matching name
    New(TemplateId),
}

impl SaveTarget {
    pub fn id(&self) -> TemplateId {
        match *self {
            Self::Existing(id) | Self::Overwrite { id, .. } | Self::New(id) => id,
        }
    }
}

/// Saved templates in insertion order
///
/// # Invariants
///
/// - No two entries share an id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<SavedTemplate>", into = "Vec<SavedTemplate>")]
pub struct TemplateLibrary {
    templates: Vec<SavedTemplate>,
}

impl From<Vec<SavedTemplate>> for TemplateLibrary {
    fn from(templates: Vec<SavedTemplate>) -> Self {
        Self::from_templates(templates)
    }
}

impl From<TemplateLibrary> for Vec<SavedTemplate> {
    fn from(library: TemplateLibrary) -> Self {
        library.templates
    }
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library, dropping any entry whose id was already seen.
    pub fn from_templates(templates: Vec<SavedTemplate>) -> Self {
        let mut library = Self::new();
        for mut saved in templates {
            if library.get(saved.id).is_some() {
                continue;
            }
            saved.template.ensure_unique_ids();
            library.templates.push(saved);
        }
        library
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn list(&self) -> &[SavedTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, id: TemplateId) -> Option<&SavedTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn require(&self, id: TemplateId) -> Result<&SavedTemplate, DomainError> {
        self.get(id)
            .ok_or_else(|| DomainError::not_found("SavedTemplate", id.to_string()))
    }

    /// First entry whose name matches, ignoring case and outer whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&SavedTemplate> {
        self.templates.iter().find(|t| names_match(t.name(), name))
    }

    /// Decide which entry a save of `name` writes to.
    ///
    /// | current | name matches | result |
    /// |---------|--------------|--------|
    /// | set     | nothing, or current itself | `Existing(current)` |
    /// | unset   | entry X      | `Overwrite { X, orphaned: None }` |
    /// | set     | other entry X | `Overwrite { X, orphaned: Some(current) }` |
    /// | unset   | nothing      | `New(fresh)` |
    pub fn resolve_save_target(&self, name: &str, current: Option<TemplateId>) -> SaveTarget {
        match (current, self.find_by_name(name).map(|t| t.id)) {
            (Some(current), Some(existing)) if existing != current => SaveTarget::Overwrite {
                id: existing,
                orphaned: Some(current),
            },
            (Some(current), _) => SaveTarget::Existing(current),
            (None, Some(existing)) => SaveTarget::Overwrite {
                id: existing,
                orphaned: None,
            },
            (None, None) => SaveTarget::New(TemplateId::new()),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Save `template` under the resolved identity.
    ///
    /// The stored name is trimmed. Replaces the entry in place when the id
    /// exists, appends otherwise. A blank name fails without touching the
    /// library.
    pub fn save(
        &mut self,
        template: &Template,
        current: Option<TemplateId>,
        now: DateTime<Utc>,
    ) -> Result<SaveTarget, DomainError> {
        let name = template.validated_name()?;
        let target = self.resolve_save_target(name, current);

        let mut stored = template.clone();
        stored.name = name.to_string();
        let saved = SavedTemplate::new(target.id(), stored, now);

        match self.templates.iter_mut().find(|t| t.id == saved.id) {
            Some(slot) => *slot = saved,
            None => self.templates.push(saved),
        }

        Ok(target)
    }

    /// Remove an entry, returning it if it existed.
    pub fn remove(&mut self, id: TemplateId) -> Option<SavedTemplate> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(index))
    }

    /// A detached copy of an entry, renamed `"<name> - Copy"`.
    pub fn duplicate_of(&self, id: TemplateId) -> Option<Template> {
        self.get(id).map(|saved| {
            Template::new(
                saved.template.copy_name(),
                saved.template.skills.clone(),
                saved.template.equipment.clone(),
            )
        })
    }
}
