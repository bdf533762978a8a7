//! Presentation-facing wrapper around [`MatchGame`].
//!
//! A presentation forwards clicks, timer fires and restart requests to a
//! [`Session`], which drives the state machine and reports every change to
//! its [`GameObserver`].
//!
//! ## Deferred resolution
//!
//! Completing a pair returns a [`ResolveTicket`]. The presentation waits
//! `ticket.delay()` and hands the ticket back through
//! [`Session::on_resolve_timer_fired`]. Only the most recently issued
//! ticket is honoured: a restart cancels it, and a stale ticket from an
//! earlier deal is ignored.

use std::time::Duration;

use super::events::GameObserver;
use super::state::{MatchGame, Phase, Resolution, SelectOutcome};
use crate::core::{TileIndex, TileStatus};

/// Handle for one pending resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolveTicket {
    id: u64,
    delay: Duration,
}

impl ResolveTicket {
    /// How long to wait before firing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A game plus the observer that renders it.
pub struct Session<O: GameObserver> {
    game: MatchGame,
    observer: O,
    pending: Option<ResolveTicket>,
    next_ticket: u64,
}

impl<O: GameObserver> Session<O> {
    /// Wrap `game`. A game handed over mid-pair gets its ticket now.
    pub fn new(game: MatchGame, observer: O) -> Self {
        let mut session = Self {
            game,
            observer,
            pending: None,
            next_ticket: 0,
        };
        if session.game.phase() == Phase::Resolving {
            session.pending = Some(session.issue_ticket());
        }
        session
    }

    fn issue_ticket(&mut self) -> ResolveTicket {
        let ticket = ResolveTicket {
            id: self.next_ticket,
            delay: self.game.config().resolve_delay,
        };
        self.next_ticket += 1;
        ticket
    }

    #[must_use]
    pub fn game(&self) -> &MatchGame {
        &self.game
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// The ticket currently awaiting its timer, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ResolveTicket> {
        self.pending
    }

    pub fn into_parts(self) -> (MatchGame, O) {
        (self.game, self.observer)
    }

    /// A tile was clicked.
    ///
    /// Returns a ticket to schedule when the click completed a pair.
    pub fn on_tile_clicked(&mut self, index: TileIndex) -> Option<ResolveTicket> {
        match self.game.select_tile(index) {
            SelectOutcome::Ignored => None,
            SelectOutcome::Revealed => {
                self.observer.tile_status_changed(index, TileStatus::Revealed);
                None
            }
            SelectOutcome::PairComplete { penalized, .. } => {
                self.observer.tile_status_changed(index, TileStatus::Revealed);
                if penalized {
                    self.observer.score_changed(self.game.score());
                }

                let ticket = self.issue_ticket();
                self.pending = Some(ticket);
                Some(ticket)
            }
        }
    }

    /// The resolution timer for `ticket` elapsed.
    ///
    /// Returns `None` for a ticket that is not the pending one.
    pub fn on_resolve_timer_fired(&mut self, ticket: ResolveTicket) -> Option<Resolution> {
        if self.pending != Some(ticket) {
            tracing::debug!(ticket = ticket.id, "ignoring stale resolve ticket");
            return None;
        }
        self.pending = None;

        let resolution = self.game.resolve()?;
        for index in resolution.tiles {
            self.observer.tile_status_changed(index, resolution.status());
        }
        if let Some(result) = self.game.result() {
            self.observer.game_completed(result.final_score, result.tries);
        }
        Some(resolution)
    }

    /// Restart button pressed. Cancels any pending resolution.
    pub fn on_restart_requested(&mut self) {
        let face_up: Vec<TileIndex> = self
            .game
            .tiles()
            .iter()
            .filter(|t| t.status().is_face_up())
            .map(|t| t.index)
            .collect();

        if let Some(ticket) = self.pending.take() {
            tracing::debug!(ticket = ticket.id, "cancelled pending resolution");
        }
        self.game.restart();

        for index in face_up {
            self.observer.tile_status_changed(index, TileStatus::Hidden);
        }
        self.observer.score_changed(self.game.score());
    }
}
