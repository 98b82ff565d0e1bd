//! Rules and roster loading for the clock game.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
