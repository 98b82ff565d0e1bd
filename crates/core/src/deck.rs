use crate::{HourCard, MinuteCard, RngState, HOUR_MAX, HOUR_MIN, MINUTE_MAX, MINUTE_MIN};
use serde::{Deserialize, Serialize};

/// Undealt hour cards. Index 0 is the head; the last card is the tail, which
/// is where draws come from.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourDeck {
    pub cards: Vec<HourCard>,
}

impl HourDeck {
    pub fn from_cards(cards: Vec<HourCard>) -> Self {
        Self { cards }
    }

    /// Every hour number `copies` times; the first `precious` copies of each
    /// number are flagged precious. Ids run from 1 in build order.
    pub fn standard(copies: u8, precious: u8) -> Self {
        let mut cards = Vec::with_capacity(usize::from(HOUR_MAX) * usize::from(copies));
        let mut next_id = 1u32;
        for number in HOUR_MIN..=HOUR_MAX {
            for copy in 0..copies {
                cards.push(HourCard::new(next_id, number, copy < precious));
                next_id = next_id.saturating_add(1);
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<HourCard> {
        self.cards.pop()
    }

    /// The two tail cards as `(inner, outer)`.
    pub fn tail_pair(&self) -> Option<(HourCard, HourCard)> {
        match self.cards.as_slice() {
            [.., inner, outer] => Some((*inner, *outer)),
            _ => None,
        }
    }

    /// Moves `card` to the head. A card that cannot be found by value is
    /// taken from the tail instead. Returns the index the card came from.
    pub fn move_to_head(&mut self, card: &HourCard) -> Option<usize> {
        if self.cards.is_empty() {
            return None;
        }
        let from = self
            .cards
            .iter()
            .position(|candidate| candidate == card)
            .unwrap_or(self.cards.len() - 1);
        let moved = self.cards.remove(from);
        self.cards.insert(0, moved);
        Some(from)
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinuteDeck {
    pub cards: Vec<MinuteCard>,
}

impl MinuteDeck {
    pub fn standard() -> Self {
        Self {
            cards: (MINUTE_MIN..=MINUTE_MAX).map(MinuteCard::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<MinuteCard> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.cards.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }
}
