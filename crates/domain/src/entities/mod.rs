//! Domain entities - Core business objects with identity

mod equipment;
mod skill;
mod template;

pub use equipment::{Equipment, EquipmentEdit};
pub use skill::{Skill, SkillEdit};
pub use template::{
    default_equipment, default_skills, SavedTemplate, Template, COPY_SUFFIX,
    DEFAULT_EQUIPMENT_SLOTS, DEFAULT_SKILL_SLOTS,
};
