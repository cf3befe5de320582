//! Abilities and skills.
//!
//! A character has four abilities, each with an integer rating and a set of
//! named skills. Abilities are stored by key in an ordered map so that actor
//! documents round-trip untouched; [`Ability`] is the closed set of keys the
//! ruleset knows about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{normalize_key, KeyedMap};
use crate::error::DomainError;

/// The four Hypermall abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Physick,
    Craveability,
    Thinkitude,
    Savvy,
}

impl Ability {
    pub const ALL: [Ability; 4] = [
        Ability::Physick,
        Ability::Craveability,
        Ability::Thinkitude,
        Ability::Savvy,
    ];

    /// Key under which the ability is stored in actor data.
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Physick => "physick",
            Ability::Craveability => "craveability",
            Ability::Thinkitude => "thinkitude",
            Ability::Savvy => "savvy",
        }
    }

    /// Three-letter alias usable in roll formulas.
    pub fn shorthand(&self) -> &'static str {
        match self {
            Ability::Physick => "phy",
            Ability::Craveability => "cra",
            Ability::Thinkitude => "thi",
            Ability::Savvy => "sav",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Ability::Physick => "Physick",
            Ability::Craveability => "Craveability",
            Ability::Thinkitude => "Thinkitude",
            Ability::Savvy => "Savvy",
        }
    }

    /// Resolve an ability from its key or shorthand, ignoring case.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == name || a.shorthand() == name)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

/// Shorthand for an ability stored under `name`, if it is one of the four.
pub fn ability_shorthand(name: &str) -> Option<&'static str> {
    Ability::ALL
        .into_iter()
        .find(|a| a.key() == name)
        .map(|a| a.shorthand())
}

/// A skill rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillScore {
    pub value: i32,
}

impl SkillScore {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

/// An ability rating with its skills.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityScore {
    pub value: i32,
    #[serde(default)]
    pub skills: KeyedMap<SkillScore>,
}

impl AbilityScore {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            skills: KeyedMap::new(),
        }
    }

    /// Builder-style skill insertion.
    pub fn with_skill(mut self, name: impl Into<String>, value: i32) -> Self {
        self.skills.insert(name, SkillScore::new(value));
        self
    }

    /// First skill whose normalized name equals the normalized `key`.
    pub fn skill(&self, key: &str) -> Option<(&str, &SkillScore)> {
        let wanted = normalize_key(key);
        self.skills.find(|name| normalize_key(name) == wanted)
    }
}

/// All of an actor's abilities, in document order.
pub type Abilities = KeyedMap<AbilityScore>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_is_closed_set() {
        assert_eq!(ability_shorthand("physick"), Some("phy"));
        assert_eq!(ability_shorthand("craveability"), Some("cra"));
        assert_eq!(ability_shorthand("thinkitude"), Some("thi"));
        assert_eq!(ability_shorthand("savvy"), Some("sav"));
        assert_eq!(ability_shorthand("charm"), None);
        assert_eq!(ability_shorthand("Savvy"), None);
    }

    #[test]
    fn lookup_accepts_key_or_shorthand() {
        assert_eq!(Ability::lookup("PHYSICK"), Some(Ability::Physick));
        assert_eq!(Ability::lookup("thi"), Some(Ability::Thinkitude));
        assert_eq!(Ability::lookup("luck"), None);
    }

    #[test]
    fn from_str_reports_unknown() {
        assert!(matches!(
            "luck".parse::<Ability>(),
            Err(DomainError::Parse(_))
        ));
        assert_eq!("sav".parse::<Ability>().unwrap(), Ability::Savvy);
    }

    #[test]
    fn skill_lookup_is_normalized() {
        let savvy = AbilityScore::new(2).with_skill("Fast Talk", 2);
        let (name, skill) = savvy.skill("fasttalk").unwrap();
        assert_eq!(name, "Fast Talk");
        assert_eq!(skill.value, 2);
        assert!(savvy.skill("FAST TALK").is_some());
        assert!(savvy.skill("haggle").is_none());
    }

    #[test]
    fn deserializes_without_skills() {
        let score: AbilityScore = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(score.value, 3);
        assert!(score.skills.is_empty());
    }
}
