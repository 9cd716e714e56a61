//! Equipment entity - an item granting a boost to one skill
//!
//! `skill_name` is matched against skill names verbatim; it need not name a
//! skill that exists in the template.

use serde::{Deserialize, Serialize};

use crate::common::{coerce_number, finite_or_zero, number::deserialize_lenient};
use crate::EquipmentId;

/// An equipment slot in a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EquipmentId,
    /// Display label (e.g., "Ring of Wizardry")
    #[serde(default)]
    pub name: String,
    /// Name of the boosted skill
    #[serde(default)]
    pub skill_name: String,
    /// Boost amount, always finite
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub value: f64,
}

impl Equipment {
    pub fn new(name: impl Into<String>, skill_name: impl Into<String>, value: f64) -> Self {
        Self {
            id: EquipmentId::new(),
            name: name.into(),
            skill_name: skill_name.into(),
            value: finite_or_zero(value),
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), String::new(), 0.0)
    }

    pub fn apply(&mut self, edit: EquipmentEdit) {
        match edit {
            EquipmentEdit::Name(name) => self.name = name,
            EquipmentEdit::SkillName(skill_name) => self.skill_name = skill_name,
            EquipmentEdit::Value(value) => self.value = finite_or_zero(value),
        }
    }
}

/// A single-field edit to an equipment entry
#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentEdit {
    Name(String),
    SkillName(String),
    Value(f64),
}

impl EquipmentEdit {
    pub fn value_from_input(raw: &str) -> Self {
        Self::Value(coerce_number(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_skill_name() {
        let item = Equipment::new("Talisman", "Anatomy", 10.0);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["skillName"], "Anatomy");
        assert_eq!(json["name"], "Talisman");
        assert_eq!(json["value"], 10.0);
        assert!(json.get("skill_name").is_none());
    }

    #[test]
    fn apply_edits() {
        let mut item = Equipment::empty();
        item.apply(EquipmentEdit::Name("Ring".into()));
        item.apply(EquipmentEdit::SkillName("Magery".into()));
        item.apply(EquipmentEdit::value_from_input("15"));

        assert_eq!(item.name, "Ring");
        assert_eq!(item.skill_name, "Magery");
        assert_eq!(item.value, 15.0);
    }

    #[test]
    fn missing_labels_default_to_empty() {
        let item: Equipment =
            serde_json::from_str(r#"{"id":"5f0c6a9e-3d1b-4f7e-9a0b-2c4d6e8f1a3b"}"#).unwrap();
        assert!(item.name.is_empty());
        assert!(item.skill_name.is_empty());
        assert_eq!(item.value, 0.0);
    }
}
