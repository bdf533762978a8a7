//! Notifications from the game to its presentation layer.
//!
//! A presentation implements [`GameObserver`] and redraws in response.
//! [`EventLog`] records the same notifications as [`GameEvent`] values,
//! which is how tests and replays watch a session.

use serde::{Deserialize, Serialize};

use crate::core::{TileIndex, TileStatus};

/// Receives state changes from a [`Session`](super::Session).
///
/// Every method defaults to doing nothing.
pub trait GameObserver {
    /// A tile was revealed, matched or flipped back.
    fn tile_status_changed(&mut self, _index: TileIndex, _status: TileStatus) {}

    /// The score changed (penalty or restart).
    fn score_changed(&mut self, _score: i64) {}

    /// The last pair was matched.
    fn game_completed(&mut self, _final_score: i64, _tries: u32) {}
}

impl GameObserver for () {}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn tile_status_changed(&mut self, index: TileIndex, status: TileStatus) {
        (**self).tile_status_changed(index, status);
    }

    fn score_changed(&mut self, score: i64) {
        (**self).score_changed(score);
    }

    fn game_completed(&mut self, final_score: i64, tries: u32) {
        (**self).game_completed(final_score, tries);
    }
}

/// A recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TileStatusChanged { index: TileIndex, status: TileStatus },
    ScoreChanged { score: i64 },
    GameCompleted { final_score: i64, tries: u32 },
}

/// Observer that keeps every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the log.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// How many `GameCompleted` events were recorded.
    #[must_use]
    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameCompleted { .. }))
            .count()
    }

    /// The most recent score notification.
    #[must_use]
    pub fn last_score(&self) -> Option<i64> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::ScoreChanged { score } => Some(*score),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn tile_status_changed(&mut self, index: TileIndex, status: TileStatus) {
        self.events.push(GameEvent::TileStatusChanged { index, status });
    }

    fn score_changed(&mut self, score: i64) {
        self.events.push(GameEvent::ScoreChanged { score });
    }

    fn game_completed(&mut self, final_score: i64, tries: u32) {
        self.events.push(GameEvent::GameCompleted { final_score, tries });
    }
}
