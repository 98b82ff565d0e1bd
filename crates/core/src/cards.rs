use crate::gear_value;
use serde::{Deserialize, Serialize};

pub const HOUR_MIN: u8 = 1;
pub const HOUR_MAX: u8 = 12;
pub const MINUTE_MIN: u8 = 1;
pub const MINUTE_MAX: u8 = 60;

/// An hour card. Two cards compare equal only when id, number and the
/// precious flag all match, so deck lookups by value are lookups by identity
/// as long as ids are unique.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct HourCard {
    #[serde(default)]
    pub id: u32,
    pub number: u8,
    #[serde(default)]
    pub precious: bool,
}

impl HourCard {
    pub fn new(id: u32, number: u8, precious: bool) -> Self {
        Self {
            id,
            number,
            precious,
        }
    }

    pub fn is_valid(&self) -> bool {
        (HOUR_MIN..=HOUR_MAX).contains(&self.number)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MinuteCard {
    pub value: u8,
}

impl MinuteCard {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn gear(&self) -> f64 {
        gear_value(i64::from(self.value))
    }
}
