use crate::{ClockPosition, Event, EventBus, Faction, GameState, Hand, Player, Role, RulesConfig};
use std::collections::HashSet;
use tracing::{debug, trace};

/// The role `unit` would evolve into right now, or `None` if it cannot.
///
/// Roles are tried in [`Hand::ALL`] order and the first one that is free and
/// sufficiently collected wins.
pub fn evaluate_upgrade(unit: &Player, state: &GameState, rules: &RulesConfig) -> Option<Hand> {
    if unit.faction != Faction::TimeDemon
        || unit.ejected
        || unit.role != Role::Juvenile
        || unit.hour_cards.is_empty()
    {
        return None;
    }
    if !unit.has_precious() {
        trace!(unit = %unit.id, "no precious card held");
        return None;
    }
    let held: HashSet<u8> = unit.hour_cards.iter().map(|card| card.number).collect();
    Hand::ALL.into_iter().find(|&hand| {
        if state.role_holder(hand, Some(&unit.id)).is_some() {
            trace!(unit = %unit.id, role = %hand, "role already held");
            return false;
        }
        rules
            .upgrade_for(hand)
            .is_some_and(|rule| rule.matches(&held) >= rules.min_matches)
    })
}

/// Promotes a juvenile time demon when its hand satisfies a free role.
///
/// On success the unit takes the role and its evolved name, and every held
/// card goes back to the clock slot of its number: precious cards on top,
/// the rest underneath what is already there.
pub fn attempt_role_upgrade(
    state: &mut GameState,
    unit_id: &str,
    rules: &RulesConfig,
    events: &mut EventBus,
) -> bool {
    let Some(index) = state.players.iter().position(|player| player.id == unit_id) else {
        return false;
    };
    let Some(hand) = evaluate_upgrade(&state.players[index], state, rules) else {
        return false;
    };
    // Every card must map to a slot before anything changes.
    if state.players[index]
        .hour_cards
        .iter()
        .any(|card| ClockPosition::new(card.number).is_none())
    {
        debug!(unit = %unit_id, "hand holds an hour card with no clock slot");
        return false;
    }

    let unit = &mut state.players[index];
    unit.role = Role::Hand(hand);
    unit.name = unit.evolved_name(hand);
    let name = unit.name.clone();
    let cards = std::mem::take(&mut unit.hour_cards);
    for card in cards {
        let Some(slot) = ClockPosition::new(card.number) else {
            continue;
        };
        if card.precious {
            state.clock_face.place_top(slot, card);
        } else {
            state.clock_face.place_bottom(slot, card);
        }
        events.push(Event::CardReturned {
            card,
            slot,
            on_top: card.precious,
        });
    }
    events.push(Event::RoleEvolved {
        unit: unit_id.to_string(),
        role: hand,
        name: name.clone(),
    });
    debug!(unit = %unit_id, role = %hand, %name, "unit evolved");
    true
}
