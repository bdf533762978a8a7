//! Deck of paired faces.
//!
//! A deck for `pairs` symbols holds `2 * pairs` faces, each symbol in
//! `0..pairs` appearing exactly twice. Position `i` of the deck is the face
//! dealt to tile `i`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::tile::TileIndex;
use crate::error::MatchError;

/// Face value of a tile.
///
/// Symbols are opaque to the game; the presentation maps them to images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Ordered faces for one deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    faces: Vec<Symbol>,
}

impl Deck {
    /// Deal a uniformly shuffled deck of `pairs` symbols.
    pub fn shuffled(pairs: usize, rng: &mut GameRng) -> Self {
        let mut faces: Vec<Symbol> = (0..pairs)
            .flat_map(|s| {
                let symbol = Symbol(s as u8);
                [symbol, symbol]
            })
            .collect();
        rng.shuffle(&mut faces);
        Self { faces }
    }

    /// Build a deck from explicit faces.
    ///
    /// Fails unless the faces are exactly two of each symbol `0..len/2`.
    ///
    /// ```
    /// use match_it::core::{Deck, Symbol};
    ///
    /// let deck = Deck::from_faces([0, 1, 1, 0].map(Symbol)).unwrap();
    /// assert_eq!(deck.pairs(), 2);
    ///
    /// assert!(Deck::from_faces([0, 0, 0, 1].map(Symbol)).is_err());
    /// ```
    pub fn from_faces(faces: impl Into<Vec<Symbol>>) -> Result<Self, MatchError> {
        let deck = Self {
            faces: faces.into(),
        };
        if deck.is_well_formed() {
            Ok(deck)
        } else {
            Err(MatchError::MalformedDeck {
                pairs: deck.faces.len() / 2,
            })
        }
    }

    /// Number of distinct symbols.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.faces.len() / 2
    }

    /// Number of faces (tiles).
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face dealt to a position.
    #[must_use]
    pub fn face(&self, index: TileIndex) -> Option<Symbol> {
        self.faces.get(index.index()).copied()
    }

    /// All faces in deal order.
    #[must_use]
    pub fn faces(&self) -> &[Symbol] {
        &self.faces
    }

    /// How many times each symbol occurs.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for &face in &self.faces {
            *counts.entry(face).or_insert(0) += 1;
        }
        counts
    }

    /// Exactly two copies of each symbol `0..pairs`, and at least one pair.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let pairs = self.pairs();
        if pairs == 0 || self.faces.len() % 2 != 0 {
            return false;
        }
        let counts = self.symbol_counts();
        counts.len() == pairs
            && counts
                .iter()
                .all(|(symbol, &count)| symbol.index() < pairs && count == 2)
    }
}
