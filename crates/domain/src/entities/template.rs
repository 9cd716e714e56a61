//! Template entities - the unit of persistence and sharing
//!
//! A `Template` is what the user edits. A `SavedTemplate` is a template bound
//! to an identity in the saved-template library.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Equipment, Skill};
use crate::{DomainError, EquipmentId, SkillId, TemplateId};

/// Number of empty skill slots in a fresh template
pub const DEFAULT_SKILL_SLOTS: usize = 8;

/// Number of empty equipment slots in a fresh template
pub const DEFAULT_EQUIPMENT_SLOTS: usize = 3;

/// Suffix appended to the name of a duplicated template
pub const COPY_SUFFIX: &str = " - Copy";

pub fn default_skills() -> Vec<Skill> {
    (0..DEFAULT_SKILL_SLOTS).map(|_| Skill::empty()).collect()
}

pub fn default_equipment() -> Vec<Equipment> {
    (0..DEFAULT_EQUIPMENT_SLOTS)
        .map(|_| Equipment::empty())
        .collect()
}

/// A named collection of skills and equipment
///
/// # Invariants
///
/// - Skill ids are unique within `skills`, equipment ids within `equipment`
///   (see [`Template::ensure_unique_ids`] for data read from outside)
///
/// # Serialized form
///
/// `name` is required. Missing `skills` or `equipment` fall back to the
/// standard empty slot sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default = "default_skills")]
    pub skills: Vec<Skill>,
    #[serde(default = "default_equipment")]
    pub equipment: Vec<Equipment>,
}

impl Default for Template {
    /// Empty name, 8 empty skill slots, 3 empty equipment slots, fresh ids.
    fn default() -> Self {
        Self {
            name: String::new(),
            skills: default_skills(),
            equipment: default_equipment(),
        }
    }
}

impl Template {
    pub fn new(name: impl Into<String>, skills: Vec<Skill>, equipment: Vec<Equipment>) -> Self {
        Self {
            name: name.into(),
            skills,
            equipment,
        }
    }

    /// The trimmed name, or a validation error when it is blank.
    pub fn validated_name(&self) -> Result<&str, DomainError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Template name is required."));
        }
        Ok(trimmed)
    }

    /// Name given to a duplicate of this template.
    pub fn copy_name(&self) -> String {
        format!("{}{}", self.name, COPY_SUFFIX)
    }

    pub fn skill_mut(&mut self, id: SkillId) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.id == id)
    }

    pub fn equipment_mut(&mut self, id: EquipmentId) -> Option<&mut Equipment> {
        self.equipment.iter_mut().find(|e| e.id == id)
    }

    /// Re-issue any id already used earlier in the same sequence.
    ///
    /// Returns the number of ids replaced.
    pub fn ensure_unique_ids(&mut self) -> usize {
        let mut replaced = 0;

        let mut seen = HashSet::new();
        for skill in &mut self.skills {
            while !seen.insert(skill.id) {
                skill.id = SkillId::new();
                replaced += 1;
            }
        }

        let mut seen = HashSet::new();
        for item in &mut self.equipment {
            while !seen.insert(item.id) {
                item.id = EquipmentId::new();
                replaced += 1;
            }
        }

        replaced
    }
}

/// A template stored in the library under a stable id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub id: TemplateId,
    #[serde(flatten)]
    pub template: Template,
    /// Last save time, stored as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl SavedTemplate {
    pub fn new(id: TemplateId, template: Template, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            template,
            updated_at,
        }
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }
}
