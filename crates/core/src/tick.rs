use crate::{
    activate_hour_hand_ability, activate_minute_hand_ability, attempt_role_upgrade,
    AbilityOutcome, EventBus, GameState, Roller, RulesConfig,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TickReport {
    pub hour_hand: AbilityOutcome,
    pub minute_hand: AbilityOutcome,
    pub evolved: Vec<String>,
}

/// One resolution tick: clear the ability marker, try the hour hand then the
/// minute hand, then give every active juvenile a chance to evolve.
pub fn resolve_tick(
    state: &mut GameState,
    rules: &RulesConfig,
    rng: &mut impl Roller,
    events: &mut EventBus,
) -> TickReport {
    state.begin_tick();
    let hour_hand = activate_hour_hand_ability(state, rules, rng, events);
    let minute_hand = activate_minute_hand_ability(state, rules, rng, events);
    let evolved: Vec<String> = state
        .juvenile_ids()
        .into_iter()
        .filter(|id| attempt_role_upgrade(state, id, rules, events))
        .collect();
    if !evolved.is_empty() {
        info!(count = evolved.len(), "units evolved this tick");
    }
    TickReport {
        hour_hand,
        minute_hand,
        evolved,
    }
}
