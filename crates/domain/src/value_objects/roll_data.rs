//! Flat roll data derived from an actor.
//!
//! Formulas address ratings by a single key: the ability name (`savvy`), its
//! shorthand (`sav`), or a skill's normalized name (`fasttalk`). Keys are
//! written in document order and later writes overwrite earlier ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::normalize_key;
use crate::entities::{ability_shorthand, Abilities};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollData(BTreeMap<String, i32>);

impl RollData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_abilities(abilities: &Abilities) -> Self {
        let mut data = Self::new();
        data.extend_abilities(abilities);
        data
    }

    pub fn extend_abilities(&mut self, abilities: &Abilities) {
        for (name, ability) in abilities.iter() {
            self.insert(name, ability.value);
            if let Some(shorthand) = ability_shorthand(name) {
                self.insert(shorthand, ability.value);
            }
            for (skill_name, skill) in ability.skills.iter() {
                self.insert(normalize_key(skill_name), skill.value);
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: i32) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AbilityScore;

    #[test]
    fn aliases_shorthand_and_skills() {
        let abilities: Abilities = [
            ("physick", AbilityScore::new(3).with_skill("Heavy Lifting", 1)),
            ("savvy", AbilityScore::new(2).with_skill("Fast Talk", 2)),
        ]
        .into_iter()
        .collect();
        let data = RollData::from_abilities(&abilities);
        assert_eq!(data.get("physick"), Some(3));
        assert_eq!(data.get("phy"), Some(3));
        assert_eq!(data.get("sav"), Some(2));
        assert_eq!(data.get("fasttalk"), Some(2));
        assert_eq!(data.get("heavylifting"), Some(1));
        assert_eq!(data.get("Fast Talk"), None);
    }

    #[test]
    fn unknown_ability_has_no_shorthand() {
        let abilities: Abilities = [("luck", AbilityScore::new(1))].into_iter().collect();
        let data = RollData::from_abilities(&abilities);
        assert_eq!(data.len(), 1);
        assert_eq!(data.get("luck"), Some(1));
    }

    #[test]
    fn later_skill_overwrites() {
        let abilities: Abilities = [
            ("physick", AbilityScore::new(1).with_skill("Brawl", 4)),
            ("savvy", AbilityScore::new(1).with_skill("brawl", 1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(RollData::from_abilities(&abilities).get("brawl"), Some(1));
    }
}
