//! Entities - actor documents and the ratings they carry

mod ability;
mod actor;
mod contractor;

pub use ability::{ability_shorthand, Abilities, Ability, AbilityScore, SkillScore};
pub use actor::{Actor, ActorKind, NpcData};
pub use contractor::{ContractorData, Handedness, IclTeam};
