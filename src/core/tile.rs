//! Tile identification and reveal status.
//!
//! ## TileIndex
//!
//! Type-safe board position. Positions are 0-based and laid out row-major,
//! so on the classic board index 5 is row 1, column 1.
//!
//! ## TileStatus
//!
//! Every tile is `Hidden`, `Revealed` or `Matched`. Only the state machine
//! in [`crate::game`] changes a tile's status.

use serde::{Deserialize, Serialize};

use super::deck::Symbol;

/// Board position of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub u8);

impl TileIndex {
    /// Create a new tile index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw position (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every position on a board of `tile_count` tiles.
    ///
    /// ```
    /// use match_it::core::TileIndex;
    ///
    /// let tiles: Vec<_> = TileIndex::all(16).collect();
    /// assert_eq!(tiles.len(), 16);
    /// assert_eq!(tiles[15], TileIndex::new(15));
    /// ```
    pub fn all(tile_count: usize) -> impl Iterator<Item = TileIndex> {
        (0..tile_count).map(|i| TileIndex(i as u8))
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Reveal status of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileStatus {
    /// Face down, selectable.
    #[default]
    Hidden,
    /// Face up, waiting for its pair to be resolved.
    Revealed,
    /// Face up for the rest of the deal.
    Matched,
}

impl TileStatus {
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == TileStatus::Hidden
    }

    /// Whether the face is visible to the player.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        !self.is_hidden()
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Board position.
    pub index: TileIndex,

    /// Face dealt to this position.
    pub face: Symbol,

    status: TileStatus,
}

impl Tile {
    /// Create a hidden tile.
    #[must_use]
    pub fn new(index: TileIndex, face: Symbol) -> Self {
        Self {
            index,
            face,
            status: TileStatus::Hidden,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> TileStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: TileStatus) {
        self.status = status;
    }
}
