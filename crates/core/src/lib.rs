//! Ability resolution and role evolution for the clock game. Keep this crate
//! free of IO and platform concerns.

pub mod ability;
pub mod cards;
pub mod clock;
pub mod config;
pub mod deck;
pub mod events;
pub mod evolution;
pub mod gear;
pub mod rng;
pub mod state;
pub mod tick;
pub mod unit;

pub use ability::*;
pub use cards::*;
pub use clock::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use evolution::*;
pub use gear::*;
pub use rng::*;
pub use state::*;
pub use tick::*;
pub use unit::*;
