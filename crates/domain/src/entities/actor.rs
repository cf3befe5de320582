//! Actors and their type-specific behaviour.
//!
//! An actor document carries a `type` tag that selects how derived data and
//! roll data are prepared. Each kind owns its own system data.

use serde::{Deserialize, Serialize};

use super::ability::Abilities;
use super::contractor::ContractorData;
use crate::error::RollError;
use crate::ids::ActorId;
use crate::value_objects::{resolve_dice_pool, DicePool, RollData, RollRequest};

/// System data of a non-player actor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NpcData {
    #[serde(default)]
    pub abilities: Abilities,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "system", rename_all = "lowercase")]
pub enum ActorKind {
    Contractor(ContractorData),
    Npc(NpcData),
}

impl ActorKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ActorKind::Contractor(_) => "contractor",
            ActorKind::Npc(_) => "npc",
        }
    }

    pub fn abilities(&self) -> &Abilities {
        match self {
            ActorKind::Contractor(data) => &data.abilities,
            ActorKind::Npc(data) => &data.abilities,
        }
    }

    pub fn abilities_mut(&mut self) -> &mut Abilities {
        match self {
            ActorKind::Contractor(data) => &mut data.abilities,
            ActorKind::Npc(data) => &mut data.abilities,
        }
    }

    pub fn prepare_derived_data(&mut self) {
        match self {
            ActorKind::Contractor(data) => data.prepare_derived_data(),
            ActorKind::Npc(_) => {}
        }
    }

    pub fn roll_data(&self) -> RollData {
        match self {
            ActorKind::Contractor(data) => data.roll_data(),
            ActorKind::Npc(data) => RollData::from_abilities(&data.abilities),
        }
    }
}

/// A character document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub id: ActorId,
    pub name: String,
    #[serde(flatten)]
    pub kind: ActorKind,
}

impl Actor {
    pub fn new(name: impl Into<String>, kind: ActorKind) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
        }
    }

    pub fn abilities(&self) -> &Abilities {
        self.kind.abilities()
    }

    pub fn prepare_derived_data(&mut self) {
        self.kind.prepare_derived_data();
    }

    pub fn roll_data(&self) -> RollData {
        self.kind.roll_data()
    }

    /// Resolve a check against this actor's abilities.
    pub fn dice_pool(&self, request: &RollRequest) -> Result<DicePool, RollError> {
        resolve_dice_pool(self.abilities(), request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AbilityScore;
    use crate::value_objects::ResourceTracker;

    fn contractor_json() -> &'static str {
        r#"{
            "name": "Dolores Vance",
            "type": "contractor",
            "system": {
                "abilities": {
                    "physick": {"value": 3, "skills": {}},
                    "savvy": {"value": 2, "skills": {"fast talk": {"value": 2}}}
                },
                "stress": {"value": 0, "min": 0, "max": 6}
            }
        }"#
    }

    #[test]
    fn deserializes_tagged_contractor() {
        let actor: Actor = serde_json::from_str(contractor_json()).unwrap();
        assert!(matches!(actor.kind, ActorKind::Contractor(_)));
        assert_eq!(actor.kind.type_name(), "contractor");
        assert_eq!(actor.abilities().len(), 2);
    }

    #[test]
    fn deserializes_npc() {
        let actor: Actor = serde_json::from_str(
            r#"{"name": "Mall Cop", "type": "npc", "system": {"abilities": {"physick": {"value": 2}}}}"#,
        )
        .unwrap();
        assert!(matches!(actor.kind, ActorKind::Npc(_)));
        assert_eq!(actor.roll_data().get("phy"), Some(2));
    }

    #[test]
    fn dice_pool_uses_abilities() {
        let actor: Actor = serde_json::from_str(contractor_json()).unwrap();
        let pool = actor
            .dice_pool(&RollRequest::new("physick", "fasttalk", 1))
            .unwrap();
        assert_eq!(pool.total(), 6);
    }

    #[test]
    fn npc_prepare_is_noop() {
        let mut npc = Actor::new(
            "Janitor",
            ActorKind::Npc(NpcData {
                abilities: [("savvy", AbilityScore::new(1))].into_iter().collect(),
            }),
        );
        let before = npc.clone();
        npc.prepare_derived_data();
        assert_eq!(npc, before);
    }

    #[test]
    fn contractor_prepare_clamps() {
        let mut actor = Actor::new(
            "Rex",
            ActorKind::Contractor(ContractorData {
                meat: ResourceTracker {
                    value: -1,
                    min: 0,
                    max: 4,
                },
                ..Default::default()
            }),
        );
        actor.prepare_derived_data();
        assert_eq!(actor.roll_data().get("meat"), Some(0));
    }
}
