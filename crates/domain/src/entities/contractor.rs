//! Contractor (player character) data.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ability::Abilities;
use crate::error::DomainError;
use crate::value_objects::{ResourceTracker, RollData};

/// Which hand a contractor favours. Stored as its dropdown index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Handedness {
    Lefthanded,
    #[default]
    Righthanded,
    Ambidexterous,
}

impl Handedness {
    pub const ALL: [Handedness; 3] = [
        Handedness::Lefthanded,
        Handedness::Righthanded,
        Handedness::Ambidexterous,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Handedness::Lefthanded => "Lefthanded",
            Handedness::Righthanded => "Righthanded",
            Handedness::Ambidexterous => "Ambidexterous",
        }
    }
}

impl TryFrom<u8> for Handedness {
    type Error = DomainError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown handedness index: {}", index)))
    }
}

impl From<Handedness> for u8 {
    fn from(value: Handedness) -> Self {
        value as u8
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Interstellar Contractor League team. Stored as its dropdown index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum IclTeam {
    #[default]
    GroupHogs,
    Manticores,
    Geldings,
    PatriotDefense,
    FightinIrish,
    Rotties,
    Jackfish,
}

impl IclTeam {
    pub const ALL: [IclTeam; 7] = [
        IclTeam::GroupHogs,
        IclTeam::Manticores,
        IclTeam::Geldings,
        IclTeam::PatriotDefense,
        IclTeam::FightinIrish,
        IclTeam::Rotties,
        IclTeam::Jackfish,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            IclTeam::GroupHogs => "HyperMall Group Hogs",
            IclTeam::Manticores => "Musashi Heavy Industries Manticores",
            IclTeam::Geldings => "Warpath LLC Geldings",
            IclTeam::PatriotDefense => "Patriot Defense Systems",
            IclTeam::FightinIrish => "FIGHTIN' IRISH",
            IclTeam::Rotties => "Rotterdam HOUNDS (\"The Rotties\")",
            IclTeam::Jackfish => "Welland Jackfish",
        }
    }
}

impl TryFrom<u8> for IclTeam {
    type Error = DomainError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown team index: {}", index)))
    }
}

impl From<IclTeam> for u8 {
    fn from(value: IclTeam) -> Self {
        value as u8
    }
}

impl fmt::Display for IclTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// System data of a contractor actor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorData {
    #[serde(default)]
    pub abilities: Abilities,
    #[serde(default)]
    pub stress: ResourceTracker,
    #[serde(default)]
    pub debt: ResourceTracker,
    #[serde(default)]
    pub meat: ResourceTracker,
    #[serde(default)]
    pub security_clearance: i32,
    #[serde(default)]
    pub handedness: Handedness,
    #[serde(default)]
    pub team: IclTeam,
    #[serde(default)]
    pub initiative_modifier: i32,
}

impl ContractorData {
    pub fn prepare_derived_data(&mut self) {
        for tracker in [&mut self.stress, &mut self.debt, &mut self.meat] {
            tracker.normalize();
        }
    }

    pub fn roll_data(&self) -> RollData {
        let mut data = RollData::from_abilities(&self.abilities);
        data.insert("stress", self.stress.value);
        data.insert("debt", self.debt.value);
        data.insert("meat", self.meat.value);
        data.insert("clearance", self.security_clearance);
        data.insert("init", self.initiative_modifier);
        data
    }
}
