use crate::{Hand, HOUR_MAX, HOUR_MIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub const REQUIRED_CARDS_PER_ROLE: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing upgrade requirement for {0}")]
    MissingUpgrade(Hand),
    #[error("duplicate upgrade requirement for {0}")]
    DuplicateUpgrade(Hand),
    #[error("upgrade for {hand} needs {expected} distinct cards, got {got}")]
    WrongCardCount {
        hand: Hand,
        expected: usize,
        got: usize,
    },
    #[error("upgrade for {hand} lists hour {number} outside 1..=12")]
    InvalidHour { hand: Hand, number: u8 },
    #[error("min_matches {0} must be between 1 and 4")]
    InvalidMinMatches(usize),
    #[error("precious copies {precious} exceed copies {copies}")]
    InvalidDeck { copies: u8, precious: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpgradeRequirement {
    pub hand: Hand,
    pub required_cards: Vec<u8>,
}

impl UpgradeRequirement {
    /// How many required numbers appear among `held` (already deduplicated).
    pub fn matches(&self, held: &HashSet<u8>) -> usize {
        self.required_cards
            .iter()
            .filter(|number| held.contains(number))
            .count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRule {
    pub copies_per_number: u8,
    pub precious_per_number: u8,
}

impl Default for DeckRule {
    fn default() -> Self {
        Self {
            copies_per_number: 4,
            precious_per_number: 1,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_matches() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub abilities_enabled: bool,
    #[serde(default = "default_min_matches")]
    pub min_matches: usize,
    #[serde(default = "default_upgrades")]
    pub upgrades: Vec<UpgradeRequirement>,
    #[serde(default)]
    pub deck: DeckRule,
    #[serde(default)]
    pub start_mana: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            abilities_enabled: true,
            min_matches: default_min_matches(),
            upgrades: default_upgrades(),
            deck: DeckRule::default(),
            start_mana: 0,
        }
    }
}

pub fn default_upgrades() -> Vec<UpgradeRequirement> {
    vec![
        UpgradeRequirement {
            hand: Hand::Hour,
            required_cards: vec![1, 4, 9, 10],
        },
        UpgradeRequirement {
            hand: Hand::Second,
            required_cards: vec![2, 5, 8, 11],
        },
        UpgradeRequirement {
            hand: Hand::Minute,
            required_cards: vec![3, 6, 7, 12],
        },
    ]
}

impl RulesConfig {
    pub fn upgrade_for(&self, hand: Hand) -> Option<&UpgradeRequirement> {
        self.upgrades.iter().find(|rule| rule.hand == hand)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_matches == 0 || self.min_matches > REQUIRED_CARDS_PER_ROLE {
            return Err(ConfigError::InvalidMinMatches(self.min_matches));
        }
        if self.deck.precious_per_number > self.deck.copies_per_number {
            return Err(ConfigError::InvalidDeck {
                copies: self.deck.copies_per_number,
                precious: self.deck.precious_per_number,
            });
        }
        for hand in Hand::ALL {
            let mut rules = self.upgrades.iter().filter(|rule| rule.hand == hand);
            let rule = rules.next().ok_or(ConfigError::MissingUpgrade(hand))?;
            if rules.next().is_some() {
                return Err(ConfigError::DuplicateUpgrade(hand));
            }
            if let Some(number) = rule
                .required_cards
                .iter()
                .copied()
                .find(|number| !(HOUR_MIN..=HOUR_MAX).contains(number))
            {
                return Err(ConfigError::InvalidHour { hand, number });
            }
            let distinct: HashSet<u8> = rule.required_cards.iter().copied().collect();
            if distinct.len() != REQUIRED_CARDS_PER_ROLE
                || rule.required_cards.len() != REQUIRED_CARDS_PER_ROLE
            {
                return Err(ConfigError::WrongCardCount {
                    hand,
                    expected: REQUIRED_CARDS_PER_ROLE,
                    got: distinct.len(),
                });
            }
        }
        Ok(())
    }
}
