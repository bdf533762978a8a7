//! The matching game: state machine, observer callbacks, and the session
//! that connects them to a presentation.

pub mod events;
pub mod session;
pub mod state;

pub use events::{EventLog, GameEvent, GameObserver};
pub use session::{ResolveTicket, Session};
pub use state::{BoardView, CellView, GameResult, MatchGame, Phase, Resolution, SelectOutcome};
