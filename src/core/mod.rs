//! Core types: tiles, deck, RNG, configuration.
//!
//! These are the building blocks the state machine in [`crate::game`]
//! operates on. None of them know about phases or scoring.

pub mod config;
pub mod deck;
pub mod rng;
pub mod tile;

pub use config::{GameConfig, FAST_DELAY, GRID_COLUMNS, NORMAL_DELAY};
pub use deck::{Deck, Symbol};
pub use rng::GameRng;
pub use tile::{Tile, TileIndex, TileStatus};
