use crate::{ClockPosition, Hand, HourCard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ManaSpent {
        unit: String,
        amount: u32,
        remaining: u32,
    },
    DeckPeeked {
        unit: String,
        inner: HourCard,
        outer: HourCard,
    },
    DeckReordered {
        unit: String,
        card: HourCard,
        from: usize,
    },
    UnitMoved {
        actor: String,
        unit: String,
        from: ClockPosition,
        to: ClockPosition,
    },
    RoleEvolved {
        unit: String,
        role: Hand,
        name: String,
    },
    CardReturned {
        card: HourCard,
        slot: ClockPosition,
        on_top: bool,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
