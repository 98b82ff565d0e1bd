use clock_core::{
    activate_hour_hand_ability, activate_minute_hand_ability, gear_value, resolve_tick,
    ClockPosition, EventBus, Faction, GameState, Hand, HourDeck, Player, RngState, Role,
    RulesConfig,
};
use proptest::prelude::*;

fn table(seed: u64, hour_mana: u32, minute_mana: u32, deck_cards: u8) -> (GameState, RngState) {
    let mut rng = RngState::from_seed(seed);
    let mut deck = HourDeck::standard(4, 1);
    deck.shuffle(&mut rng);
    deck.cards.truncate(usize::from(deck_cards));
    let mut state = GameState::new(deck);
    let at = |value: u8| ClockPosition::new(value).expect("valid position");
    let units = vec![
        Player::new("p1", "時魔 1", Faction::TimeDemon)
            .with_role(Role::Hand(Hand::Hour))
            .with_mana(hour_mana)
            .with_position(at(3)),
        Player::new("p2", "時魔 2", Faction::TimeDemon)
            .with_role(Role::Hand(Hand::Minute))
            .with_mana(minute_mana)
            .with_position(at(1)),
        Player::new("p3", "evil", Faction::EvilOfTime).with_position(at(12)),
        Player::new("p4", "cursed", Faction::CursedOne).with_position(at(7)),
        Player::new("p5", "時魔 幼體 5", Faction::TimeDemon).with_position(at(9)),
    ];
    for unit in units {
        state.add_player(unit).expect("add unit");
    }
    (state, rng)
}

proptest! {
    #[test]
    fn gear_value_is_total(value in any::<i64>()) {
        let gear = gear_value(value);
        prop_assert!(gear == 0.0 || gear == 0.5 || gear == 1.0);
        if !(1..=60).contains(&value) {
            prop_assert_eq!(gear, 0.0);
        }
    }

    #[test]
    fn positions_stay_on_the_dial(start in 1u8..=12, steps in 0usize..40) {
        let mut position = ClockPosition::new(start).expect("valid position");
        for _ in 0..steps {
            position = position.counter_clockwise();
            prop_assert!((1..=12).contains(&position.get()));
        }
        let forward = ClockPosition::new(start).expect("valid position").clockwise();
        prop_assert_eq!(forward.get(), start % 12 + 1);
    }

    #[test]
    fn abilities_never_overdraw_mana(
        seed in any::<u64>(),
        hour_mana in 0u32..4,
        minute_mana in 0u32..5,
        deck_cards in 0u8..6,
        ticks in 1usize..30,
    ) {
        let (mut state, mut rng) = table(seed, hour_mana, minute_mana, deck_cards);
        let rules = RulesConfig::default();
        let mut events = EventBus::default();
        let cards = state.hour_card_count();
        let mut previous = (hour_mana, minute_mana);
        for _ in 0..ticks {
            state.begin_tick();
            activate_hour_hand_ability(&mut state, &rules, &mut rng, &mut events);
            activate_minute_hand_ability(&mut state, &rules, &mut rng, &mut events);
            let now = (state.players[0].mana, state.players[1].mana);
            prop_assert!(now.0 <= previous.0 && now.1 <= previous.1);
            previous = now;
            for player in &state.players {
                if let Some(position) = player.position {
                    prop_assert!((1..=12).contains(&position.get()));
                }
            }
        }
        prop_assert_eq!(state.hour_card_count(), cards);
    }

    #[test]
    fn small_deck_never_mutated_by_hour_hand(seed in any::<u64>(), deck_cards in 0u8..2) {
        let (mut state, mut rng) = table(seed, 3, 0, deck_cards);
        let deck = state.hour_deck.clone();
        for _ in 0..8 {
            state.begin_tick();
            activate_hour_hand_ability(&mut state, &RulesConfig::default(), &mut rng, &mut EventBus::default());
            prop_assert_eq!(&state.hour_deck, &deck);
            prop_assert_eq!(state.players[0].mana, 3);
            prop_assert!(!state.ability_marker);
        }
    }

    #[test]
    fn ticks_conserve_cards_and_unique_roles(seed in any::<u64>(), deals in 0usize..24) {
        let (mut state, mut rng) = table(seed, 2, 2, 48);
        let rules = RulesConfig::default();
        let mut events = EventBus::default();
        state.players[0].role = Role::Juvenile;
        state.players[1].role = Role::Juvenile;
        let cards = state.hour_card_count();
        for _ in 0..deals {
            for id in state.juvenile_ids() {
                state.deal_hour_card(&id).expect("known unit");
            }
            resolve_tick(&mut state, &rules, &mut rng, &mut events);
            for hand in Hand::ALL {
                let holders = state
                    .players
                    .iter()
                    .filter(|player| player.is_active() && player.holds(hand))
                    .count();
                prop_assert!(holders <= 1);
            }
        }
        prop_assert_eq!(state.hour_card_count(), cards);
    }
}
