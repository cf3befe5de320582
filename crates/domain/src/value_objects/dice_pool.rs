//! Dice pool resolution.
//!
//! A check rolls `stat + skill + passions` six-sided dice. The skill is
//! searched across every ability rather than only the chosen stat's own
//! skills, so a contractor may pair any stat with any skill they have.

use serde::{Deserialize, Serialize};

use crate::common::normalize_key;
use crate::entities::{Abilities, AbilityScore};
use crate::error::RollError;

/// A check assembled from sheet input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequest {
    pub stat_key: String,
    pub skill_key: String,
    #[serde(default)]
    pub passions_modifier: i32,
}

impl RollRequest {
    pub fn new(stat_key: impl Into<String>, skill_key: impl Into<String>, passions_modifier: i32) -> Self {
        Self {
            stat_key: stat_key.into(),
            skill_key: skill_key.into(),
            passions_modifier,
        }
    }
}

/// The pieces a dice pool was summed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DicePool {
    pub stat_value: i32,
    pub skill_value: i32,
    pub passions_modifier: i32,
}

impl DicePool {
    /// Total number of dice. Not clamped; may be zero or negative.
    pub fn total(&self) -> i32 {
        self.stat_value
            .saturating_add(self.skill_value)
            .saturating_add(self.passions_modifier)
    }
}

/// Find the ability stored under `stat_key`.
///
/// Exact keys win; otherwise the key is matched case-insensitively.
/// Shorthands like `phy` are roll-data aliases only and do not resolve here.
fn find_stat<'a>(abilities: &'a Abilities, stat_key: &str) -> Option<&'a AbilityScore> {
    if let Some(score) = abilities.get(stat_key) {
        return Some(score);
    }
    let lowered = stat_key.trim().to_lowercase();
    abilities
        .find(|k| k.to_lowercase() == lowered)
        .map(|(_, score)| score)
}

/// Break a request down into its stat, skill and modifier parts.
///
/// When several abilities carry the same normalized skill name, the first in
/// document order is used. [`RollData`](crate::RollData) flattens skills in
/// the same order and so keeps the last one under that key.
pub fn resolve_dice_pool(abilities: &Abilities, request: &RollRequest) -> Result<DicePool, RollError> {
    let stat = find_stat(abilities, &request.stat_key)
        .ok_or_else(|| RollError::unknown_stat(&request.stat_key))?;

    let wanted = normalize_key(&request.skill_key);
    let skill = abilities
        .iter()
        .find_map(|(_, ability)| ability.skill(&wanted))
        .map(|(_, skill)| skill)
        .ok_or_else(|| RollError::unknown_skill(&request.skill_key))?;

    Ok(DicePool {
        stat_value: stat.value,
        skill_value: skill.value,
        passions_modifier: request.passions_modifier,
    })
}

/// Number of dice for `stat_key` + `skill_key` + `passions_modifier`.
pub fn resolve_pool(
    abilities: &Abilities,
    stat_key: &str,
    skill_key: &str,
    passions_modifier: i32,
) -> Result<i32, RollError> {
    let request = RollRequest::new(stat_key, skill_key, passions_modifier);
    resolve_dice_pool(abilities, &request).map(|pool| pool.total())
}
