use crate::{HourCard, HOUR_MAX, HOUR_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot on the clock face. Always within 1..=12.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct ClockPosition(u8);

impl ClockPosition {
    pub const SLOTS: usize = HOUR_MAX as usize;

    pub fn new(value: u8) -> Option<Self> {
        (HOUR_MIN..=HOUR_MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// One step clockwise: 12 wraps to 1.
    pub fn clockwise(self) -> Self {
        Self(self.0 % HOUR_MAX + 1)
    }

    /// One step counter-clockwise: 1 wraps to 12.
    pub fn counter_clockwise(self) -> Self {
        if self.0 <= HOUR_MIN {
            Self(HOUR_MAX)
        } else {
            Self(self.0 - 1)
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (HOUR_MIN..=HOUR_MAX).map(Self)
    }

    fn slot_index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for ClockPosition {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("clock position {value} outside 1..=12"))
    }
}

impl From<ClockPosition> for u8 {
    fn from(value: ClockPosition) -> Self {
        value.0
    }
}

impl fmt::Display for ClockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hour cards resting on the twelve slots. Index 0 of each stack is the top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClockFace {
    slots: Vec<Vec<HourCard>>,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockFace {
    pub fn new() -> Self {
        Self {
            slots: vec![Vec::new(); ClockPosition::SLOTS],
        }
    }

    pub fn slot(&self, position: ClockPosition) -> &[HourCard] {
        &self.slots[position.slot_index()]
    }

    pub fn top(&self, position: ClockPosition) -> Option<&HourCard> {
        self.slot(position).first()
    }

    pub fn place_top(&mut self, position: ClockPosition, card: HourCard) {
        self.slots[position.slot_index()].insert(0, card);
    }

    pub fn place_bottom(&mut self, position: ClockPosition, card: HourCard) {
        self.slots[position.slot_index()].push(card);
    }

    pub fn total_cards(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(value: u8) -> ClockPosition {
        ClockPosition::new(value).expect("valid position")
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ClockPosition::new(0).is_none());
        assert!(ClockPosition::new(13).is_none());
        assert_eq!(ClockPosition::all().count(), 12);
    }

    #[test]
    fn wraps_both_directions() {
        assert_eq!(pos(12).clockwise(), pos(1));
        assert_eq!(pos(5).clockwise(), pos(6));
        assert_eq!(pos(1).counter_clockwise(), pos(12));
        assert_eq!(pos(7).counter_clockwise(), pos(6));
    }

    #[test]
    fn top_and_bottom_placement() {
        let mut face = ClockFace::new();
        let slot = pos(3);
        face.place_bottom(slot, HourCard::new(1, 3, false));
        face.place_top(slot, HourCard::new(2, 3, true));
        face.place_bottom(slot, HourCard::new(3, 3, false));
        let ids: Vec<u32> = face.slot(slot).iter().map(|card| card.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(face.top(slot).map(|card| card.id), Some(2));
        assert_eq!(face.total_cards(), 3);
    }

    #[test]
    fn position_deserialize_checks_range() {
        let ok: Result<ClockPosition, _> = serde_json::from_str("12");
        assert_eq!(ok.ok(), Some(pos(12)));
        let bad: Result<ClockPosition, _> = serde_json::from_str("13");
        assert!(bad.is_err());
    }
}
