//! The matching-game state machine.
//!
//! ## Phases
//!
//! - `Idle`: no tile awaiting resolution
//! - `OneSelected`: one tile revealed
//! - `Resolving`: two tiles revealed, waiting for [`MatchGame::resolve`]
//! - `Complete`: every tile matched
//!
//! The phase is derived from the selection and the matched-pair count, so
//! it can never disagree with the board.
//!
//! ## Scoring
//!
//! Completing a pair is one try. Every try past `penalty_threshold` costs
//! `penalty` points. The score has no floor short of `i64::MIN`, where it
//! saturates.
//!
//! Input that makes no sense in the current phase (clicking a face-up tile,
//! clicking while a pair is pending, resolving with nothing pending) is
//! ignored rather than reported.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Deck, GameConfig, GameRng, Symbol, Tile, TileIndex, TileStatus};
use crate::error::MatchError;

/// Where the game is in its select/resolve cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OneSelected,
    Resolving,
    Complete,
}

impl Phase {
    /// Whether `select_tile` can reveal a tile in this phase.
    #[must_use]
    pub fn accepts_selection(self) -> bool {
        matches!(self, Phase::Idle | Phase::OneSelected)
    }
}

/// What a call to [`MatchGame::select_tile`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored,
    /// The tile was revealed and is the first of a pair.
    Revealed,
    /// The tile completed a pair; the game is now `Resolving`.
    PairComplete {
        /// Whether the two faces are equal.
        is_match: bool,
        /// Whether this try cost points.
        penalized: bool,
    },
}

/// What a call to [`MatchGame::resolve`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved pair, in selection order.
    pub tiles: [TileIndex; 2],
    /// `true` if both tiles are now matched, `false` if both are hidden again.
    pub is_match: bool,
    /// Whether this resolution matched the last pair.
    pub completed: bool,
}

impl Resolution {
    /// Status both tiles now have.
    #[must_use]
    pub fn status(&self) -> TileStatus {
        if self.is_match {
            TileStatus::Matched
        } else {
            TileStatus::Hidden
        }
    }
}

/// Final tally of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub final_score: i64,
    pub tries: u32,
}

/// One cell as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub index: TileIndex,
    pub status: TileStatus,
    /// `None` while the tile is hidden.
    pub face: Option<Symbol>,
}

/// Player-visible snapshot of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub phase: Phase,
    pub score: i64,
    pub tries: u32,
    pub cells: Vec<CellView>,
}

/// A single-player matching game.
#[derive(Clone, Debug)]
pub struct MatchGame {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    tiles: Vec<Tile>,
    selection: SmallVec<[TileIndex; 2]>,
    score: i64,
    tries: u32,
    matched_pairs: usize,
}

impl MatchGame {
    /// Create a game and deal the first deck.
    pub fn new(config: GameConfig, mut rng: GameRng) -> Result<Self, MatchError> {
        config.validate()?;
        let deck = Deck::shuffled(config.pairs, &mut rng);
        Ok(Self::from_parts(config, rng, deck))
    }

    /// Create a game on an explicit first deck.
    ///
    /// Later deals still shuffle with `rng`.
    pub fn with_deck(config: GameConfig, deck: Deck, rng: GameRng) -> Result<Self, MatchError> {
        config.validate()?;
        if deck.pairs() != config.pairs || !deck.is_well_formed() {
            return Err(MatchError::MalformedDeck {
                pairs: config.pairs,
            });
        }
        Ok(Self::from_parts(config, rng, deck))
    }

    fn from_parts(config: GameConfig, rng: GameRng, deck: Deck) -> Self {
        let mut game = Self {
            score: config.starting_score,
            config,
            rng,
            deck,
            tiles: Vec::new(),
            selection: SmallVec::new(),
            tries: 0,
            matched_pairs: 0,
        };
        game.reset_board();
        game
    }

    // === Lifecycle ===

    /// Shuffle a new deck and reset every tile, the score and the tries.
    pub fn deal(&mut self) {
        self.deck = Deck::shuffled(self.config.pairs, &mut self.rng);
        self.reset_board();
    }

    /// Start over from any phase. Same as [`deal`](Self::deal).
    pub fn restart(&mut self) {
        tracing::debug!(score = self.score, tries = self.tries, "restarting game");
        self.deal();
    }

    fn reset_board(&mut self) {
        self.tiles = self
            .deck
            .faces()
            .iter()
            .enumerate()
            .map(|(i, &face)| Tile::new(TileIndex(i as u8), face))
            .collect();
        self.selection.clear();
        self.score = self.config.starting_score;
        self.tries = 0;
        self.matched_pairs = 0;
        tracing::debug!(faces = ?self.deck.faces(), "dealt new deck");
    }

    // === Moves ===

    /// Reveal a hidden tile.
    ///
    /// Ignored unless the game is `Idle` or `OneSelected` and the tile
    /// exists and is hidden. Revealing the second tile of a pair counts a
    /// try and applies the penalty if the threshold is passed.
    pub fn select_tile(&mut self, index: TileIndex) -> SelectOutcome {
        let phase = self.phase();
        if !phase.accepts_selection() {
            tracing::debug!(%index, ?phase, "selection ignored");
            return SelectOutcome::Ignored;
        }

        let Some(tile) = self.tiles.get_mut(index.index()) else {
            tracing::debug!(%index, "selection out of range");
            return SelectOutcome::Ignored;
        };
        if !tile.status().is_hidden() {
            tracing::debug!(%index, status = ?tile.status(), "tile already face up");
            return SelectOutcome::Ignored;
        }

        tile.set_status(TileStatus::Revealed);
        self.selection.push(index);

        if self.selection.len() < 2 {
            return SelectOutcome::Revealed;
        }

        self.tries += 1;
        let penalized = self.tries > self.config.penalty_threshold;
        if penalized {
            self.score = self.score.saturating_sub(self.config.penalty);
        }
        let is_match = self.selection_matches();

        tracing::debug!(
            first = %self.selection[0],
            second = %self.selection[1],
            is_match,
            tries = self.tries,
            score = self.score,
            "pair complete"
        );

        SelectOutcome::PairComplete {
            is_match,
            penalized,
        }
    }

    /// Finish the pending pair: keep it matched or flip it back.
    ///
    /// Returns `None` if the game is not `Resolving`.
    pub fn resolve(&mut self) -> Option<Resolution> {
        if self.phase() != Phase::Resolving {
            return None;
        }

        let is_match = self.selection_matches();
        let tiles = [self.selection[0], self.selection[1]];
        let status = if is_match {
            TileStatus::Matched
        } else {
            TileStatus::Hidden
        };
        for index in tiles {
            self.tiles[index.index()].set_status(status);
        }
        self.selection.clear();

        if is_match {
            self.matched_pairs += 1;
        }
        let completed = self.is_complete();
        if completed {
            tracing::debug!(score = self.score, tries = self.tries, "game complete");
        }

        Some(Resolution {
            tiles,
            is_match,
            completed,
        })
    }

    fn selection_matches(&self) -> bool {
        match self.selection.as_slice() {
            [first, second] => {
                self.tiles[first.index()].face == self.tiles[second.index()].face
            }
            _ => false,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete() {
            return Phase::Complete;
        }
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::Resolving,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn tries(&self) -> u32 {
        self.tries
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// All pairs matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.config.pairs
    }

    /// Final tally, once complete.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_complete().then_some(GameResult {
            final_score: self.score,
            tries: self.tries,
        })
    }

    /// Tiles revealed and not yet resolved, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[TileIndex] {
        &self.selection
    }

    /// Whether the pending pair will match. `None` unless `Resolving`.
    #[must_use]
    pub fn pending_match(&self) -> Option<bool> {
        (self.phase() == Phase::Resolving).then(|| self.selection_matches())
    }

    #[must_use]
    pub fn tile(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(index.index())
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Snapshot for a presentation layer; hidden faces are withheld.
    #[must_use]
    pub fn board_view(&self) -> BoardView {
        BoardView {
            phase: self.phase(),
            score: self.score,
            tries: self.tries,
            cells: self
                .tiles
                .iter()
                .map(|tile| CellView {
                    index: tile.index,
                    status: tile.status(),
                    face: tile.status().is_face_up().then_some(tile.face),
                })
                .collect(),
        }
    }
}
