//! Per-role special abilities resolved once per tick.
//!
//! Every procedure checks all of its preconditions before the first mutation,
//! so an ability that does not fire leaves the table untouched. The returned
//! [`AbilityOutcome`] only tags what happened; callers that treat every
//! non-activation the same get the plain "nothing happened" behaviour.

use crate::{ClockPosition, Event, EventBus, Faction, GameState, Hand, HourCard, Roller, RulesConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub const HOUR_HAND_PEEK_COST: u32 = 1;
pub const HOUR_HAND_REORDER_COST: u32 = 1;
pub const MINUTE_HAND_COST: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AbilityOutcome {
    Disabled,
    AlreadyUsed,
    NoActor,
    InsufficientMana,
    GateFailed,
    DeckTooSmall,
    /// Hour hand looked at the tail pair but did not reorder.
    Peeked { inner: HourCard, outer: HourCard },
    Reordered { card: HourCard, from: usize },
    MovedSelf { from: ClockPosition, to: ClockPosition },
    MovedTarget {
        unit: String,
        from: ClockPosition,
        to: ClockPosition,
    },
    /// Minute hand paid but had nobody to push.
    NoTarget,
}

impl AbilityOutcome {
    /// True when the ability spent mana and consumed the tick's marker.
    pub fn activated(&self) -> bool {
        matches!(
            self,
            Self::Peeked { .. }
                | Self::Reordered { .. }
                | Self::MovedSelf { .. }
                | Self::MovedTarget { .. }
                | Self::NoTarget
        )
    }
}

fn blocked(state: &GameState, rules: &RulesConfig) -> Option<AbilityOutcome> {
    if !rules.abilities_enabled {
        return Some(AbilityOutcome::Disabled);
    }
    if state.ability_marker {
        return Some(AbilityOutcome::AlreadyUsed);
    }
    None
}

/// 時針: peek at the two tail cards of the hour deck and, on a second coin,
/// move the lower of them to the head.
pub fn activate_hour_hand_ability(
    state: &mut GameState,
    rules: &RulesConfig,
    rng: &mut impl Roller,
    events: &mut EventBus,
) -> AbilityOutcome {
    if let Some(outcome) = blocked(state, rules) {
        return outcome;
    }
    let Some(actor) = state
        .players
        .iter()
        .position(|player| player.is_active() && player.holds(Hand::Hour))
    else {
        return AbilityOutcome::NoActor;
    };
    if state.players[actor].mana < HOUR_HAND_PEEK_COST {
        return AbilityOutcome::InsufficientMana;
    }
    if !rng.coin() {
        trace!(unit = %state.players[actor].id, "hour hand gate failed");
        return AbilityOutcome::GateFailed;
    }
    let Some((inner, outer)) = state.hour_deck.tail_pair() else {
        debug!(deck = state.hour_deck.len(), "hour hand needs two cards in the deck");
        return AbilityOutcome::DeckTooSmall;
    };

    let unit = &mut state.players[actor];
    if !unit.spend_mana(HOUR_HAND_PEEK_COST) {
        return AbilityOutcome::InsufficientMana;
    }
    let unit_id = unit.id.clone();
    let remaining = unit.mana;
    state.ability_marker = true;
    events.push(Event::ManaSpent {
        unit: unit_id.clone(),
        amount: HOUR_HAND_PEEK_COST,
        remaining,
    });
    events.push(Event::DeckPeeked {
        unit: unit_id.clone(),
        inner,
        outer,
    });
    debug!(unit = %unit_id, inner = inner.number, outer = outer.number, "hour hand peeked");

    if remaining < HOUR_HAND_REORDER_COST || !rng.coin() {
        return AbilityOutcome::Peeked { inner, outer };
    }
    let card = if inner.number < outer.number { inner } else { outer };
    let Some(from) = state.hour_deck.move_to_head(&card) else {
        return AbilityOutcome::Peeked { inner, outer };
    };
    let unit = &mut state.players[actor];
    unit.spend_mana(HOUR_HAND_REORDER_COST);
    events.push(Event::ManaSpent {
        unit: unit_id.clone(),
        amount: HOUR_HAND_REORDER_COST,
        remaining: unit.mana,
    });
    events.push(Event::DeckReordered {
        unit: unit_id.clone(),
        card,
        from,
    });
    debug!(unit = %unit_id, card = card.number, from, "hour hand moved card to head");
    AbilityOutcome::Reordered { card, from }
}

/// 分針: step itself counter-clockwise, or push a random positioned time
/// demon or evil of time one step clockwise.
pub fn activate_minute_hand_ability(
    state: &mut GameState,
    rules: &RulesConfig,
    rng: &mut impl Roller,
    events: &mut EventBus,
) -> AbilityOutcome {
    if let Some(outcome) = blocked(state, rules) {
        return outcome;
    }
    let Some(actor) = state.players.iter().position(|player| {
        player.is_active() && player.holds(Hand::Minute) && player.position.is_some()
    }) else {
        return AbilityOutcome::NoActor;
    };
    if state.players[actor].mana < MINUTE_HAND_COST {
        return AbilityOutcome::InsufficientMana;
    }
    if !rng.coin() {
        trace!(unit = %state.players[actor].id, "minute hand gate failed");
        return AbilityOutcome::GateFailed;
    }

    let unit = &mut state.players[actor];
    if !unit.spend_mana(MINUTE_HAND_COST) {
        return AbilityOutcome::InsufficientMana;
    }
    let actor_id = unit.id.clone();
    events.push(Event::ManaSpent {
        unit: actor_id.clone(),
        amount: MINUTE_HAND_COST,
        remaining: unit.mana,
    });
    state.ability_marker = true;

    if rng.coin() {
        let unit = &mut state.players[actor];
        let Some(from) = unit.position else {
            return AbilityOutcome::NoTarget;
        };
        let to = from.counter_clockwise();
        unit.position = Some(to);
        events.push(Event::UnitMoved {
            actor: actor_id.clone(),
            unit: actor_id.clone(),
            from,
            to,
        });
        debug!(unit = %actor_id, %from, %to, "minute hand moved itself");
        return AbilityOutcome::MovedSelf { from, to };
    }

    let candidates: Vec<usize> = state
        .players
        .iter()
        .enumerate()
        .filter(|(_, player)| {
            player.is_active()
                && matches!(player.faction, Faction::TimeDemon | Faction::EvilOfTime)
                && player.position.is_some()
        })
        .map(|(index, _)| index)
        .collect();
    if candidates.is_empty() {
        debug!(unit = %actor_id, "minute hand found no target");
        return AbilityOutcome::NoTarget;
    }
    let target = &mut state.players[candidates[rng.pick(candidates.len())]];
    let Some(from) = target.position else {
        return AbilityOutcome::NoTarget;
    };
    let to = from.clockwise();
    target.position = Some(to);
    let target_id = target.id.clone();
    events.push(Event::UnitMoved {
        actor: actor_id.clone(),
        unit: target_id.clone(),
        from,
        to,
    });
    debug!(unit = %actor_id, target = %target_id, %from, %to, "minute hand pushed target");
    AbilityOutcome::MovedTarget {
        unit: target_id,
        from,
        to,
    }
}
