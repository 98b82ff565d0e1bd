//! Minute-card gear contributions.

use crate::MinuteCard;

/// Inclusive `(low, high, value)` bands over minute values 1..=60.
pub const GEAR_BANDS: [(i64, i64, f64); 5] = [
    (1, 11, 0.0),
    (12, 25, 0.5),
    (26, 35, 1.0),
    (36, 49, 0.5),
    (50, 60, 0.0),
];

/// Gear contribution of a minute value. Values outside 1..=60 contribute 0.
pub fn gear_value(value: i64) -> f64 {
    GEAR_BANDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&value))
        .map(|(_, _, gear)| *gear)
        .unwrap_or(0.0)
}

pub fn total_gear(cards: &[MinuteCard]) -> f64 {
    cards.iter().map(MinuteCard::gear).sum()
}
