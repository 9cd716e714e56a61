//! Skill aggregation - derives the summary table from skills and equipment
//!
//! `summarize` is a pure function of its inputs. Callers re-run it after
//! every edit; nothing is cached.

use std::collections::HashSet;

use serde::Serialize;

use crate::common::{locale_cmp, none_if_empty};
use crate::entities::{Equipment, Skill};

/// Total real skill points a character may hold
pub const SKILL_CAP: f64 = 720.0;

/// Aggregate values for one skill name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub name: String,
    /// Value of the first skill with this name, or 0
    pub real_value: f64,
    /// Sum of all equipment boosts targeting this name
    pub boost_value: f64,
    /// `real_value + boost_value`
    pub adjusted_value: f64,
}

impl SkillSummary {
    fn new(name: String, real_value: f64, boost_value: f64) -> Self {
        Self {
            name,
            real_value,
            boost_value,
            adjusted_value: real_value + boost_value,
        }
    }

    pub fn has_boost(&self) -> bool {
        self.boost_value > 0.0
    }
}

/// Everything the summary view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    /// One entry per distinct non-empty name, sorted by [`locale_cmp`]
    pub summaries: Vec<SkillSummary>,
    pub total_real_value: f64,
}

impl TemplateSummary {
    /// Points left before reaching [`SKILL_CAP`]; negative when over.
    pub fn remaining(&self) -> f64 {
        SKILL_CAP - self.total_real_value
    }

    /// Over the cap. Informational only, nothing is blocked.
    pub fn is_over_cap(&self) -> bool {
        self.remaining() < 0.0
    }

    pub fn get(&self, name: &str) -> Option<&SkillSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }
}

/// Merge skills and equipment boosts into the sorted summary view.
///
/// # Example
///
/// ```
/// use tmplbldr_domain::{summarize, Equipment, Skill};
///
/// let skills = vec![Skill::new("Magery", 100.0)];
/// let equipment = vec![Equipment::new("Ring", "Magery", 15.0)];
///
/// let summary = summarize(&skills, &equipment);
/// assert_eq!(summary.summaries[0].adjusted_value, 115.0);
/// assert_eq!(summary.remaining(), 620.0);
/// ```
pub fn summarize(skills: &[Skill], equipment: &[Equipment]) -> TemplateSummary {
    let mut seen = HashSet::new();
    let mut names: Vec<&str> = skills
        .iter()
        .filter_map(|s| none_if_empty(&s.name))
        .chain(equipment.iter().filter_map(|e| none_if_empty(&e.skill_name)))
        .filter(|name| seen.insert(*name))
        .collect();
    names.sort_by(|a, b| locale_cmp(a, b));

    let summaries = names
        .into_iter()
        .map(|name| {
            let real_value = skills
                .iter()
                .find(|s| s.name == name)
                .map_or(0.0, |s| s.value);
            let boost_value = equipment
                .iter()
                .filter(|e| e.skill_name == name)
                .map(|e| e.value)
                .sum();
            SkillSummary::new(name.to_string(), real_value, boost_value)
        })
        .collect();

    TemplateSummary {
        summaries,
        total_real_value: skills.iter().map(|s| s.value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(summary: &TemplateSummary) -> Vec<&str> {
        summary.summaries.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn boost_adds_to_matching_skill() {
        let skills = vec![Skill::new("Magery", 100.0)];
        let equipment = vec![Equipment::new("Ring", "Magery", 15.0)];

        let summary = summarize(&skills, &equipment);

        assert_eq!(
            summary.summaries,
            vec![SkillSummary {
                name: "Magery".into(),
                real_value: 100.0,
                boost_value: 15.0,
                adjusted_value: 115.0,
            }]
        );
        assert_eq!(summary.total_real_value, 100.0);
        assert_eq!(summary.remaining(), 620.0);
        assert!(!summary.is_over_cap());
    }

    #[test]
    fn boost_for_missing_skill_gets_own_row() {
        let skills = vec![Skill::new("Tactics", 90.0)];
        let equipment = vec![Equipment::new("Talisman", "Anatomy", 10.0)];

        let summary = summarize(&skills, &equipment);

        assert_eq!(names(&summary), vec!["Anatomy", "Tactics"]);
        let anatomy = summary.get("Anatomy").unwrap();
        assert_eq!(
            (anatomy.real_value, anatomy.boost_value, anatomy.adjusted_value),
            (0.0, 10.0, 10.0)
        );
        let tactics = summary.get("Tactics").unwrap();
        assert_eq!(
            (tactics.real_value, tactics.boost_value, tactics.adjusted_value),
            (90.0, 0.0, 90.0)
        );
        assert!(!tactics.has_boost());
    }

    #[test]
    fn empty_names_are_excluded() {
        let skills = vec![Skill::empty(), Skill::new("Parry", 50.0), Skill::empty()];
        let equipment = vec![Equipment::new("Shield", "", 5.0), Equipment::empty()];

        let summary = summarize(&skills, &equipment);

        assert_eq!(names(&summary), vec!["Parry"]);
    }

    #[test]
    fn each_name_appears_once() {
        let skills = vec![
            Skill::new("Magery", 100.0),
            Skill::new("Magery", 50.0),
            Skill::new("Meditation", 80.0),
        ];
        let equipment = vec![
            Equipment::new("Ring", "Magery", 10.0),
            Equipment::new("Bracelet", "Magery", 5.0),
            Equipment::new("Robe", "Meditation", 3.0),
        ];

        let summary = summarize(&skills, &equipment);

        assert_eq!(names(&summary), vec!["Magery", "Meditation"]);
        let magery = summary.get("Magery").unwrap();
        assert_eq!(magery.real_value, 100.0);
        assert_eq!(magery.boost_value, 15.0);
        assert_eq!(summary.total_real_value, 230.0);
    }

    #[test]
    fn sorted_case_insensitively() {
        let skills = vec![
            Skill::new("wrestling", 10.0),
            Skill::new("Alchemy", 10.0),
            Skill::new("bushido", 10.0),
        ];

        let summary = summarize(&skills, &[]);

        assert_eq!(names(&summary), vec!["Alchemy", "bushido", "wrestling"]);
    }

    #[test]
    fn accented_names_sort_beside_their_base_letter() {
        let skills = vec![
            Skill::new("Zoology", 10.0),
            Skill::new("Éclair", 10.0),
            Skill::new("Fencing", 10.0),
        ];
        let equipment = vec![Equipment::new("Sash", "Eagle", 5.0)];

        let summary = summarize(&skills, &equipment);

        assert_eq!(names(&summary), vec!["Eagle", "Éclair", "Fencing", "Zoology"]);
    }

    #[test]
    fn adjusted_is_real_plus_boost_for_odd_values() {
        let skills = vec![Skill::new("Fencing", -5.5), Skill::new("Focus", 0.0)];
        let equipment = vec![
            Equipment::new("Cursed Ring", "Fencing", -2.25),
            Equipment::new("Amulet", "Focus", 0.1),
        ];

        let summary = summarize(&skills, &equipment);

        for row in &summary.summaries {
            assert_eq!(row.adjusted_value, row.real_value + row.boost_value);
        }
        assert_eq!(summary.total_real_value, -5.5);
    }

    #[test]
    fn over_cap_is_flagged() {
        let skills: Vec<Skill> = (0..8).map(|i| Skill::new(format!("Skill {i}"), 100.0)).collect();

        let summary = summarize(&skills, &[]);

        assert_eq!(summary.total_real_value, 800.0);
        assert_eq!(summary.remaining(), -80.0);
        assert!(summary.is_over_cap());
    }

    #[test]
    fn empty_inputs_give_empty_summary() {
        let summary = summarize(&[], &[]);
        assert!(summary.summaries.is_empty());
        assert_eq!(summary.total_real_value, 0.0);
        assert_eq!(summary.remaining(), SKILL_CAP);
    }

    #[test]
    fn names_match_exactly() {
        let skills = vec![Skill::new("Magery", 100.0)];
        let equipment = vec![Equipment::new("Ring", "magery", 15.0)];

        let summary = summarize(&skills, &equipment);

        assert_eq!(names(&summary), vec!["magery", "Magery"]);
        assert_eq!(summary.get("Magery").unwrap().boost_value, 0.0);
        assert_eq!(summary.get("magery").unwrap().real_value, 0.0);
    }
}
