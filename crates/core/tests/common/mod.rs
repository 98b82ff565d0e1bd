#![allow(dead_code)]

use clock_core::{ClockPosition, Faction, Hand, HourCard, Player, Role, Roller};
use std::collections::VecDeque;

/// Replays fixed coin and pick results; running out is a test bug.
#[derive(Debug, Default)]
pub struct Script {
    coins: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl Script {
    pub fn coins(coins: &[bool]) -> Self {
        Self {
            coins: coins.iter().copied().collect(),
            picks: VecDeque::new(),
        }
    }

    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks = picks.iter().copied().collect();
        self
    }

    pub fn exhausted(&self) -> bool {
        self.coins.is_empty() && self.picks.is_empty()
    }
}

impl Roller for Script {
    fn coin(&mut self) -> bool {
        self.coins.pop_front().expect("unexpected coin roll")
    }

    fn pick(&mut self, len: usize) -> usize {
        let index = self.picks.pop_front().expect("unexpected pick");
        assert!(index < len, "scripted pick {index} out of {len}");
        index
    }
}

pub fn pos(value: u8) -> ClockPosition {
    ClockPosition::new(value).expect("valid position")
}

pub fn card(id: u32, number: u8, precious: bool) -> HourCard {
    HourCard::new(id, number, precious)
}

pub fn hand_holder(id: &str, hand: Hand, mana: u32) -> Player {
    Player::new(id, format!("時魔 {}", hand.label()), Faction::TimeDemon)
        .with_role(Role::Hand(hand))
        .with_mana(mana)
}

pub fn juvenile(id: &str, index: u32, cards: Vec<HourCard>) -> Player {
    Player::new(id, format!("時魔 幼體 {index}"), Faction::TimeDemon).with_cards(cards)
}
