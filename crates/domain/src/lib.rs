//! Hypermall Domain - actor data, dice pools and sheet invariants.
//!
//! Everything here is pure: no I/O, no logging, no randomness. Dice faces
//! come from the caller, which keeps every rule reproducible in tests.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    ability_shorthand, Abilities, Ability, AbilityScore, Actor, ActorKind, ContractorData,
    Handedness, IclTeam, NpcData, SkillScore,
};

pub use error::{DomainError, RollError};

pub use ids::{ActorId, RollId};

pub use value_objects::{
    build_roll_expression, clamp_to_range, count_successes, parse_numeric_field, resolve_dice_pool,
    resolve_pool, sanitize_attribute, DicePool, ResourceTracker, RollData, RollExpression,
    RollOutcome, RollRequest, DIE_FACES, MAX_DICE_POOL, SUCCESS_THRESHOLD,
};
