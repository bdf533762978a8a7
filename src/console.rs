//! Line-oriented terminal presentation.
//!
//! Hidden tiles show their index, face-up tiles show the label of their
//! image, and matched tiles are drawn in the player's color. Each input
//! line is a tile index, `r` to restart, or `q` to quit.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::style::{Color, Stylize};

use crate::cli::PlayerColor;
use crate::core::{Symbol, TileIndex, TileStatus, GRID_COLUMNS};
use crate::game::{BoardView, GameObserver, Session};

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Select(TileIndex),
    Restart,
    Quit,
}

impl Command {
    /// Parse a trimmed input line. `None` for anything unrecognised.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => Some(Command::Quit),
            "r" | "restart" => Some(Command::Restart),
            other => other.parse::<u8>().ok().map(|i| Command::Select(TileIndex(i))),
        }
    }
}

fn terminal_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Magenta => Color::Magenta,
    }
}

/// Terminal view of a game.
pub struct Console<W: Write> {
    out: W,
    color: PlayerColor,
    labels: Vec<String>,
}

impl<W: Write> Console<W> {
    /// `labels[i]` is shown for `Symbol(i)`.
    pub fn new(out: W, color: PlayerColor, labels: Vec<String>) -> Self {
        Self { out, color, labels }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, symbol: Symbol) -> String {
        self.labels
            .get(symbol.index())
            .cloned()
            .unwrap_or_else(|| symbol.0.to_string())
    }

    /// Draw the score line and the grid.
    pub fn render(&mut self, board: &BoardView) -> io::Result<()> {
        let width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(board.cells.len().to_string().len()))
            .max()
            .unwrap_or(2);

        writeln!(self.out, "Score: {}   Tries: {}", board.score, board.tries)?;
        for row in board.cells.chunks(GRID_COLUMNS) {
            for cell in row {
                match (cell.status, cell.face) {
                    (TileStatus::Matched, Some(face)) => {
                        let text = format!("{:^width$}", self.label(face));
                        let styled = text.with(terminal_color(self.color));
                        write!(self.out, "[{styled}] ")?;
                    }
                    (_, Some(face)) => {
                        let label = self.label(face);
                        write!(self.out, "[{label:^width$}] ")?;
                    }
                    (_, None) => {
                        write!(self.out, "[{:^width$}] ", cell.index.0)?;
                    }
                }
            }
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    fn announce(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{args}") {
            tracing::warn!("failed to write to console: {e}");
        }
    }

    fn usage(&mut self, tile_count: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "Enter a tile number 0-{}, r to restart, q to quit",
            tile_count.saturating_sub(1)
        )
    }
}

impl<W: Write> GameObserver for Console<W> {
    fn tile_status_changed(&mut self, index: TileIndex, status: TileStatus) {
        tracing::trace!(%index, ?status, "tile status changed");
    }

    fn score_changed(&mut self, score: i64) {
        self.announce(format_args!("Score: {score}"));
    }

    fn game_completed(&mut self, final_score: i64, tries: u32) {
        self.announce(format_args!(
            "Game Over!\n Score: {final_score}\n Number of tries: {tries}"
        ));
    }
}

/// Play until `q` or end of input.
///
/// `wait` stands in for the resolution timer: it is called with the
/// ticket's delay before the ticket fires.
pub fn run<W, R, F>(session: &mut Session<Console<W>>, input: R, mut wait: F) -> io::Result<()>
where
    W: Write,
    R: BufRead,
    F: FnMut(Duration),
{
    let tile_count = session.game().config().tile_count();
    redraw(session)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => session.on_restart_requested(),
            Some(Command::Select(index)) => {
                if let Some(ticket) = session.on_tile_clicked(index) {
                    redraw(session)?;
                    wait(ticket.delay());
                    session.on_resolve_timer_fired(ticket);
                }
            }
            None => {
                session.observer_mut().usage(tile_count)?;
                continue;
            }
        }
        redraw(session)?;
    }
    Ok(())
}

fn redraw<W: Write>(session: &mut Session<Console<W>>) -> io::Result<()> {
    let board = session.game().board_view();
    session.observer_mut().render(&board)
}
