//! Skill entity - a named allocation of real skill points
//!
//! Names are free text: they may be empty (an unused slot) or repeat.

use serde::{Deserialize, Serialize};

use crate::common::{coerce_number, finite_or_zero, number::deserialize_lenient};
use crate::SkillId;

/// A skill slot in a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    #[serde(default)]
    pub name: String,
    /// Real skill points, always finite
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub value: f64,
}

impl Skill {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            value: finite_or_zero(value),
        }
    }

    /// An unused slot: empty name, zero points.
    pub fn empty() -> Self {
        Self::new(String::new(), 0.0)
    }

    pub fn apply(&mut self, edit: SkillEdit) {
        match edit {
            SkillEdit::Name(name) => self.name = name,
            SkillEdit::Value(value) => self.value = finite_or_zero(value),
        }
    }
}

/// A single-field edit to a skill
#[derive(Debug, Clone, PartialEq)]
pub enum SkillEdit {
    Name(String),
    Value(f64),
}

impl SkillEdit {
    /// Value edit from raw input text; blanks and garbage become `0`.
    pub fn value_from_input(raw: &str) -> Self {
        Self::Value(coerce_number(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_skill_is_blank() {
        let skill = Skill::empty();
        assert!(skill.name.is_empty());
        assert_eq!(skill.value, 0.0);
    }

    #[test]
    fn apply_edits_one_field() {
        let mut skill = Skill::new("Magery", 100.0);
        let id = skill.id;

        skill.apply(SkillEdit::Name("Evaluating Intelligence".into()));
        assert_eq!(skill.name, "Evaluating Intelligence");
        assert_eq!(skill.value, 100.0);

        skill.apply(SkillEdit::value_from_input("95.5"));
        assert_eq!(skill.value, 95.5);
        assert_eq!(skill.id, id);
    }

    #[test]
    fn non_finite_values_become_zero() {
        let mut skill = Skill::new("Tactics", f64::NAN);
        assert_eq!(skill.value, 0.0);

        skill.apply(SkillEdit::Value(f64::INFINITY));
        assert_eq!(skill.value, 0.0);
    }

    #[test]
    fn deserializes_string_values() {
        let skill: Skill = serde_json::from_str(
            r#"{"id":"5f0c6a9e-3d1b-4f7e-9a0b-2c4d6e8f1a3b","name":"Anatomy","value":"80"}"#,
        )
        .unwrap();
        assert_eq!(skill.value, 80.0);
    }

    #[test]
    fn missing_id_is_rejected() {
        let result = serde_json::from_str::<Skill>(r#"{"name":"Anatomy","value":80}"#);
        assert!(result.is_err());
    }
}
