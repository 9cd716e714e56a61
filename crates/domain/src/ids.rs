use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| crate::DomainError::invalid_id(format!("{}: {}", s, e)))
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Template contents
define_id!(SkillId);
define_id!(EquipmentId);

// Saved templates
define_id!(TemplateId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_uuid_strings() {
        let uuid = Uuid::parse_str("5f0c6a9e-3d1b-4f7e-9a0b-2c4d6e8f1a3b").unwrap();
        let id = SkillId::from_uuid(uuid);

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"5f0c6a9e-3d1b-4f7e-9a0b-2c4d6e8f1a3b\"");

        let back: SkillId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn fresh_ids_are_distinct() {
        assert_ne!(TemplateId::new(), TemplateId::new());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<EquipmentId>().is_err());
        assert!(" 5f0c6a9e-3d1b-4f7e-9a0b-2c4d6e8f1a3b ".parse::<EquipmentId>().is_ok());
    }
}
