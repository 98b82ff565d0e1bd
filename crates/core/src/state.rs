use crate::{ClockFace, Faction, Hand, HourCard, HourDeck, MinuteDeck, Player, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    #[error("duplicate unit id: {0}")]
    DuplicateUnit(String),
    #[error("clock position {0} outside 1..=12")]
    InvalidPosition(u8),
    #[error("hour card number {0} outside 1..=12")]
    InvalidHourCard(u8),
    #[error("role {0} already held by an active unit")]
    RoleTaken(Hand),
    #[error("role {role:?} does not fit faction {faction:?}")]
    RoleMismatch { faction: Faction, role: Role },
}

/// Shared table state every resolution step reads and mutates in place.
///
/// `ability_marker` is set by whichever ability activates during a tick and
/// suppresses every further ability until [`GameState::begin_tick`] clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub hour_deck: HourDeck,
    #[serde(default)]
    pub minute_deck: MinuteDeck,
    #[serde(default)]
    pub clock_face: ClockFace,
    #[serde(default)]
    pub ability_marker: bool,
}

impl GameState {
    pub fn new(hour_deck: HourDeck) -> Self {
        Self {
            hour_deck,
            ..Self::default()
        }
    }

    pub fn add_player(&mut self, player: Player) -> Result<(), SetupError> {
        if self.player(&player.id).is_some() {
            return Err(SetupError::DuplicateUnit(player.id));
        }
        if let Some(card) = player.hour_cards.iter().find(|card| !card.is_valid()) {
            return Err(SetupError::InvalidHourCard(card.number));
        }
        if !player.role.fits(player.faction) {
            return Err(SetupError::RoleMismatch {
                faction: player.faction,
                role: player.role,
            });
        }
        if let Some(hand) = player.role.hand() {
            if player.is_active() && self.role_holder(hand, None).is_some() {
                return Err(SetupError::RoleTaken(hand));
            }
        }
        self.players.push(player);
        Ok(())
    }

    pub fn begin_tick(&mut self) {
        self.ability_marker = false;
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Active time demon currently holding `hand`, other than `except`.
    pub fn role_holder(&self, hand: Hand, except: Option<&str>) -> Option<&Player> {
        self.players.iter().find(|player| {
            player.is_active()
                && player.faction == Faction::TimeDemon
                && player.holds(hand)
                && Some(player.id.as_str()) != except
        })
    }

    pub fn juvenile_ids(&self) -> Vec<String> {
        self.players
            .iter()
            .filter(|player| player.is_active() && player.is_juvenile())
            .map(|player| player.id.clone())
            .collect()
    }

    /// Moves the deck's tail card into a unit's hand. `Ok(None)` when the
    /// deck is empty.
    pub fn deal_hour_card(&mut self, unit_id: &str) -> Result<Option<HourCard>, SetupError> {
        let index = self
            .players
            .iter()
            .position(|player| player.id == unit_id)
            .ok_or_else(|| SetupError::UnknownUnit(unit_id.to_string()))?;
        let Some(card) = self.hour_deck.draw() else {
            return Ok(None);
        };
        self.players[index].hour_cards.push(card);
        Ok(Some(card))
    }

    /// Hour cards across deck, clock face and every hand.
    pub fn hour_card_count(&self) -> usize {
        let held: usize = self.players.iter().map(|player| player.hour_cards.len()).sum();
        self.hour_deck.len() + self.clock_face.total_cards() + held
    }
}
