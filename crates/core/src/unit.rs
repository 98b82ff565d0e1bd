use crate::{ClockPosition, HourCard};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Faction {
    /// 時魔
    TimeDemon,
    /// 時之惡
    EvilOfTime,
    /// 受詛者
    CursedOne,
}

impl Faction {
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeDemon => "時魔",
            Self::EvilOfTime => "時之惡",
            Self::CursedOne => "受詛者",
        }
    }

    pub fn starting_role(self) -> Role {
        match self {
            Self::TimeDemon => Role::Juvenile,
            Self::EvilOfTime => Role::Evil,
            Self::CursedOne => Role::Cursed,
        }
    }
}

/// The three named roles a juvenile time demon can evolve into, in the order
/// the evolution resolver tries them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Hand {
    /// 時針
    Hour,
    /// 秒針
    Second,
    /// 分針
    Minute,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Second, Hand::Minute];

    pub fn label(self) -> &'static str {
        match self {
            Self::Hour => "時針",
            Self::Second => "秒針",
            Self::Minute => "分針",
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Juvenile,
    Hand(Hand),
    Evil,
    Cursed,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Juvenile => "時魔 幼體",
            Self::Hand(hand) => hand.label(),
            Self::Evil => Faction::EvilOfTime.label(),
            Self::Cursed => Faction::CursedOne.label(),
        }
    }

    /// Whether a unit of `faction` may carry this role.
    pub fn fits(self, faction: Faction) -> bool {
        match self {
            Self::Juvenile | Self::Hand(_) => faction == Faction::TimeDemon,
            Self::Evil => faction == Faction::EvilOfTime,
            Self::Cursed => faction == Faction::CursedOne,
        }
    }

    pub fn hand(self) -> Option<Hand> {
        match self {
            Self::Hand(hand) => Some(hand),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub index: Option<u32>,
    pub name: String,
    pub faction: Faction,
    pub role: Role,
    #[serde(default)]
    pub ejected: bool,
    #[serde(default)]
    pub mana: u32,
    #[serde(default)]
    pub position: Option<ClockPosition>,
    #[serde(default)]
    pub hour_cards: Vec<HourCard>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, faction: Faction) -> Self {
        let id = id.into();
        let name = name.into();
        let index = parse_unit_index(&name, &id);
        Self {
            id,
            index,
            name,
            faction,
            role: faction.starting_role(),
            ejected: false,
            mana: 0,
            position: None,
            hour_cards: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_mana(mut self, mana: u32) -> Self {
        self.mana = mana;
        self
    }

    pub fn with_position(mut self, position: ClockPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_cards(mut self, cards: Vec<HourCard>) -> Self {
        self.hour_cards = cards;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.ejected
    }

    pub fn is_juvenile(&self) -> bool {
        self.faction == Faction::TimeDemon && self.role == Role::Juvenile
    }

    pub fn holds(&self, hand: Hand) -> bool {
        self.role == Role::Hand(hand)
    }

    pub fn has_precious(&self) -> bool {
        self.hour_cards.iter().any(|card| card.precious)
    }

    /// Deducts `amount` only when the unit can afford it.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        match self.mana.checked_sub(amount) {
            Some(rest) => {
                self.mana = rest;
                true
            }
            None => false,
        }
    }

    /// Display name after evolving into `hand`.
    pub fn evolved_name(&self, hand: Hand) -> String {
        match self.index {
            Some(index) => format!("{} {} {}", Faction::TimeDemon.label(), index, hand.label()),
            None => format!("{} {}", Faction::TimeDemon.label(), hand.label()),
        }
    }
}

/// Unit index from a display name such as "時魔 幼體 3" or "時魔 3", falling
/// back to the numeric suffix of the id ("p3", "player-3").
pub fn parse_unit_index(name: &str, id: &str) -> Option<u32> {
    index_from_name(name).or_else(|| trailing_number(id))
}

fn index_from_name(name: &str) -> Option<u32> {
    let rest = name.trim().strip_prefix(Faction::TimeDemon.label())?.trim_start();
    let rest = rest.strip_prefix("幼體").unwrap_or(rest).trim();
    rest.parse().ok()
}

fn trailing_number(value: &str) -> Option<u32> {
    let digits = value
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    value[value.len() - digits..].parse().ok()
}
