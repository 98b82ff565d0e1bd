use clock_core::{Faction, Role};
use serde::{Deserialize, Serialize};

/// A card a roster entry starts with, pulled out of the hour deck by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardSpec {
    pub number: u8,
    #[serde(default)]
    pub precious: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub mana: Option<u32>,
    #[serde(default)]
    pub position: Option<u8>,
    #[serde(default)]
    pub ejected: bool,
    #[serde(default)]
    pub hour_cards: Vec<CardSpec>,
}
