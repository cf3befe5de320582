//! Sheet field updates.
//!
//! Numeric sheet inputs arrive as free text. Each update is sanitized
//! against the field's rules before it is written back to the actor.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use hypermall_domain::{sanitize_attribute, Ability, Actor, ActorKind, ResourceTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetField {
    Stress,
    Debt,
    Meat,
    Attribute(Ability),
}

impl FromStr for SheetField {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stress" => Ok(Self::Stress),
            "debt" => Ok(Self::Debt),
            "meat" => Ok(Self::Meat),
            other => Ability::lookup(other)
                .map(Self::Attribute)
                .ok_or_else(|| SheetError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for SheetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetField::Stress => f.write_str("stress"),
            SheetField::Debt => f.write_str("debt"),
            SheetField::Meat => f.write_str("meat"),
            SheetField::Attribute(ability) => write!(f, "{}", ability),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SheetError {
    #[error("Unknown sheet field: {0}")]
    UnknownField(String),
    #[error("{actor_type} actors have no {field} field")]
    UnsupportedField {
        actor_type: &'static str,
        field: SheetField,
    },
}

/// Apply one sanitized field update to an actor.
#[derive(Debug, Default)]
pub struct SheetFieldUpdate;

impl SheetFieldUpdate {
    pub fn new() -> Self {
        Self
    }

    /// Returns the value actually stored.
    pub fn apply(&self, actor: &mut Actor, field: SheetField, raw: &str) -> Result<i32, SheetError> {
        let stored = match field {
            SheetField::Attribute(ability) => {
                let actor_type = actor.kind.type_name();
                let score = actor
                    .kind
                    .abilities_mut()
                    .get_mut(ability.key())
                    .ok_or(SheetError::UnsupportedField { actor_type, field })?;
                score.value = sanitize_attribute(raw);
                score.value
            }
            SheetField::Stress | SheetField::Debt | SheetField::Meat => {
                let tracker = tracker_mut(&mut actor.kind, field)?;
                let stored = tracker.apply(raw);
                if tracker.is_maxed() {
                    tracing::info!(actor = %actor.name, field = %field, stored, "Tracker at maximum");
                }
                stored
            }
        };

        if stored.to_string() != raw.trim() {
            tracing::warn!(
                actor = %actor.name,
                field = %field,
                input = raw,
                stored,
                "Sheet input sanitized"
            );
        }
        Ok(stored)
    }
}

fn tracker_mut(kind: &mut ActorKind, field: SheetField) -> Result<&mut ResourceTracker, SheetError> {
    match kind {
        ActorKind::Contractor(data) => match field {
            SheetField::Stress => Ok(&mut data.stress),
            SheetField::Debt => Ok(&mut data.debt),
            SheetField::Meat => Ok(&mut data.meat),
            SheetField::Attribute(_) => Err(SheetError::UnsupportedField {
                actor_type: "contractor",
                field,
            }),
        },
        ActorKind::Npc(_) => Err(SheetError::UnsupportedField {
            actor_type: "npc",
            field,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypermall_domain::{AbilityScore, ContractorData, NpcData};

    fn contractor() -> Actor {
        let mut data = ContractorData {
            stress: ResourceTracker::new(2, 0, 6).unwrap(),
            debt: ResourceTracker::new(10, 0, 50).unwrap(),
            ..Default::default()
        };
        data.abilities.insert("physick", AbilityScore::new(3));
        Actor::new("Dolores", ActorKind::Contractor(data))
    }

    fn stress(actor: &Actor) -> i32 {
        match &actor.kind {
            ActorKind::Contractor(data) => data.stress.value,
            ActorKind::Npc(_) => unreachable!(),
        }
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("Stress".parse::<SheetField>().unwrap(), SheetField::Stress);
        assert_eq!(
            "phy".parse::<SheetField>().unwrap(),
            SheetField::Attribute(Ability::Physick)
        );
        assert_eq!(
            "karma".parse::<SheetField>(),
            Err(SheetError::UnknownField("karma".into()))
        );
    }

    #[test]
    fn clamps_tracker_input() {
        let mut actor = contractor();
        let update = SheetFieldUpdate::new();
        assert_eq!(update.apply(&mut actor, SheetField::Stress, "9").unwrap(), 6);
        assert_eq!(stress(&actor), 6);
        assert_eq!(update.apply(&mut actor, SheetField::Stress, "-3").unwrap(), 0);
    }

    #[test]
    fn non_numeric_tracker_input_keeps_value() {
        let mut actor = contractor();
        let stored = SheetFieldUpdate::new()
            .apply(&mut actor, SheetField::Debt, "lots")
            .unwrap();
        assert_eq!(stored, 10);
    }

    #[test]
    fn attribute_resets_to_zero() {
        let mut actor = contractor();
        let update = SheetFieldUpdate::new();
        assert_eq!(
            update
                .apply(&mut actor, SheetField::Attribute(Ability::Physick), "abc")
                .unwrap(),
            0
        );
        assert_eq!(actor.roll_data().get("phy"), Some(0));
        assert_eq!(
            update
                .apply(&mut actor, SheetField::Attribute(Ability::Physick), "4")
                .unwrap(),
            4
        );
    }

    #[test]
    fn missing_attribute_is_unsupported() {
        let mut actor = contractor();
        let err = SheetFieldUpdate::new()
            .apply(&mut actor, SheetField::Attribute(Ability::Savvy), "2")
            .unwrap_err();
        assert!(matches!(err, SheetError::UnsupportedField { .. }));
    }

    #[test]
    fn npc_has_no_trackers() {
        let mut npc = Actor::new("Mall Cop", ActorKind::Npc(NpcData::default()));
        let err = SheetFieldUpdate::new()
            .apply(&mut npc, SheetField::Meat, "1")
            .unwrap_err();
        assert_eq!(
            err,
            SheetError::UnsupportedField {
                actor_type: "npc",
                field: SheetField::Meat
            }
        );
        assert_eq!(err.to_string(), "npc actors have no meat field");
    }
}
