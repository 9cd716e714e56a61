pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod summary;

pub use aggregates::{SaveTarget, TemplateLibrary};

pub use entities::{
    default_equipment, default_skills, Equipment, EquipmentEdit, SavedTemplate, Skill, SkillEdit,
    Template, COPY_SUFFIX, DEFAULT_EQUIPMENT_SLOTS, DEFAULT_SKILL_SLOTS,
};

pub use error::DomainError;

pub use ids::{EquipmentId, SkillId, TemplateId};

pub use summary::{summarize, SkillSummary, TemplateSummary, SKILL_CAP};
