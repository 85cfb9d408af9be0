//! Core game rules. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod combat;
pub mod deck;
pub mod describe;
pub mod events;
pub mod game;
pub mod rng;
pub mod room;
pub mod state;

pub use cards::*;
pub use combat::*;
pub use deck::*;
pub use describe::*;
pub use events::*;
pub use game::*;
pub use rng::*;
pub use room::*;
pub use state::*;
