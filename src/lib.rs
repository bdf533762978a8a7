//! # match-it
//!
//! A single-player memory matching game: sixteen face-down tiles hide
//! eight pairs, the player reveals two at a time, and matching pairs stay
//! face up.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: every tile carries a `TileStatus`; the game phase
//!    is derived from the selection, never stored separately.
//!
//! 2. **Ignore, don't fail**: moves that make no sense in the current phase
//!    are no-ops. Errors exist only for bad startup input.
//!
//! 3. **Deterministic**: a seed reproduces every deal via `GameRng`.
//!
//! ## Modules
//!
//! - `core`: tiles, deck, RNG, configuration
//! - `game`: state machine, observer callbacks, session and resolve tickets
//! - `assets`: image folder validation
//! - `cli`: command-line arguments
//! - `console`: terminal presentation
//! - `error`: error types

pub mod assets;
pub mod cli;
pub mod console;
pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Deck, GameConfig, GameRng, Symbol, Tile, TileIndex, TileStatus};

pub use crate::game::{
    BoardView, CellView, EventLog, GameEvent, GameObserver, GameResult, MatchGame, Phase,
    Resolution, ResolveTicket, SelectOutcome, Session,
};

pub use crate::assets::ImageSet;
pub use crate::error::MatchError;
