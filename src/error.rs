//! Error types.
//!
//! Every variant describes bad input caught before a game starts. Moves that
//! are illegal in the current phase are not errors; the state machine
//! ignores them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating arguments, folders, decks and configs.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{} is not a valid folder", .0.display())]
    FolderNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} must contain at least {required} gif images, found {found}", .folder.display())]
    NotEnoughImages {
        folder: PathBuf,
        required: usize,
        found: usize,
    },

    #[error("failed to read {}: {source}", .folder.display())]
    ReadFolder {
        folder: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("deck must hold exactly two of each symbol 0..{pairs}")]
    MalformedDeck { pairs: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
