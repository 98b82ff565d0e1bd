use crate::schema::{CardSpec, RosterEntry};
use anyhow::{bail, Context};
use clock_core::{
    ClockPosition, GameState, HourCard, HourDeck, MinuteDeck, Player, RngState, RulesConfig,
    SetupError,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const RULES_FILE: &str = "rules.json";
const ROSTER_FILE: &str = "roster.json";

/// `rules.json` from `dir`, or the built-in rules when the file is absent.
pub fn load_rules(dir: &Path) -> anyhow::Result<RulesConfig> {
    let path = dir.join(RULES_FILE);
    let rules: RulesConfig = if path.exists() {
        load_json(&path)?
    } else {
        debug!(path = %path.display(), "no rules file, using defaults");
        RulesConfig::default()
    };
    rules
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(rules)
}

pub fn load_roster(dir: &Path) -> anyhow::Result<Vec<RosterEntry>> {
    load_json(dir.join(ROSTER_FILE))
}

/// Loads rules and roster from `dir` and deals a fresh table.
pub fn load_game(dir: &Path, seed: u64) -> anyhow::Result<(RulesConfig, GameState, RngState)> {
    let rules = load_rules(dir)?;
    let roster = load_roster(dir)?;
    let (state, rng) = build_game(&rules, &roster, seed)?;
    Ok((rules, state, rng))
}

/// Shuffled decks plus the roster seated at the table. Starting hands are
/// taken out of the hour deck so no card exists twice.
pub fn build_game(
    rules: &RulesConfig,
    roster: &[RosterEntry],
    seed: u64,
) -> anyhow::Result<(GameState, RngState)> {
    let mut rng = RngState::from_seed(seed);
    let mut hour_deck = HourDeck::standard(rules.deck.copies_per_number, rules.deck.precious_per_number);
    hour_deck.shuffle(&mut rng);
    let mut minute_deck = MinuteDeck::standard();
    minute_deck.shuffle(&mut rng);

    let mut state = GameState::new(hour_deck);
    state.minute_deck = minute_deck;
    for entry in roster {
        let player = seat(entry, rules, &mut state.hour_deck)
            .with_context(|| format!("roster entry {}", entry.id))?;
        state.add_player(player)?;
    }
    info!(
        seed,
        players = state.players.len(),
        deck = state.hour_deck.len(),
        "table ready"
    );
    Ok((state, rng))
}

fn seat(entry: &RosterEntry, rules: &RulesConfig, deck: &mut HourDeck) -> anyhow::Result<Player> {
    let mut player = Player::new(entry.id.clone(), entry.name.clone(), entry.faction);
    if entry.index.is_some() {
        player.index = entry.index;
    }
    if let Some(role) = entry.role {
        player.role = role;
    }
    player.mana = entry.mana.unwrap_or(rules.start_mana);
    player.ejected = entry.ejected;
    if let Some(value) = entry.position {
        let position = ClockPosition::new(value).ok_or(SetupError::InvalidPosition(value))?;
        player.position = Some(position);
    }
    for spec in &entry.hour_cards {
        player.hour_cards.push(take_card(deck, spec)?);
    }
    Ok(player)
}

fn take_card(deck: &mut HourDeck, spec: &CardSpec) -> anyhow::Result<HourCard> {
    let Some(index) = deck
        .cards
        .iter()
        .position(|card| card.number == spec.number && card.precious == spec.precious)
    else {
        bail!(
            "no {}hour card {} left in the deck",
            if spec.precious { "precious " } else { "" },
            spec.number
        );
    };
    Ok(deck.cards.remove(index))
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_core::{Faction, Role};

    fn entry(id: &str, name: &str, faction: Faction) -> RosterEntry {
        RosterEntry {
            id: id.to_string(),
            name: name.to_string(),
            faction,
            role: None,
            index: None,
            mana: None,
            position: None,
            ejected: false,
            hour_cards: Vec::new(),
        }
    }

    #[test]
    fn seat_derives_index_and_defaults() {
        let rules = RulesConfig {
            start_mana: 3,
            ..RulesConfig::default()
        };
        let mut deck = HourDeck::standard(4, 1);
        let player = seat(&entry("p7", "時魔 幼體 2", Faction::TimeDemon), &rules, &mut deck)
            .expect("seat");
        assert_eq!(player.index, Some(2));
        assert_eq!(player.mana, 3);
        assert_eq!(player.role, Role::Juvenile);
        assert_eq!(deck.len(), 48);
    }

    #[test]
    fn seat_pulls_starting_cards_from_deck() {
        let mut deck = HourDeck::standard(2, 1);
        let mut spec = entry("p1", "時魔 1", Faction::TimeDemon);
        spec.hour_cards = vec![
            CardSpec {
                number: 4,
                precious: true,
            },
            CardSpec {
                number: 4,
                precious: false,
            },
        ];
        let player = seat(&spec, &RulesConfig::default(), &mut deck).expect("seat");
        assert_eq!(player.hour_cards.len(), 2);
        assert_eq!(deck.len(), 22);
        assert!(deck.cards.iter().all(|card| card.number != 4));

        spec.hour_cards.truncate(1);
        let err = seat(&spec, &RulesConfig::default(), &mut deck).unwrap_err();
        assert!(err.to_string().contains("precious hour card 4"));
    }

    #[test]
    fn seat_rejects_bad_position() {
        let mut spec = entry("p1", "x", Faction::CursedOne);
        spec.position = Some(13);
        let err = seat(&spec, &RulesConfig::default(), &mut HourDeck::default()).unwrap_err();
        assert_eq!(err.to_string(), "clock position 13 outside 1..=12");
    }
}
