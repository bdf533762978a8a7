//! Command-line surface.
//!
//! ```text
//! match-it [-f] [--seed N] [--delay-ms MS] {blue,green,magenta} image_folder
//! ```
//!
//! The image folder is validated while parsing, so a bad folder fails
//! with clap's usage error before any game state exists.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::assets::ImageSet;
use crate::core::config::DEFAULT_PAIRS;
use crate::core::{GameConfig, GameRng};
use crate::error::MatchError;

/// Highlight color for matched tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum PlayerColor {
    Blue,
    Green,
    Magenta,
}

impl PlayerColor {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Magenta => "magenta",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "match-it", version)]
#[command(about = "A single player matching game")]
pub struct Cli {
    /// What color would you like for the player?
    #[arg(value_enum)]
    pub color: PlayerColor,

    /// What folder contains the game images?
    #[arg(value_parser = parse_image_folder)]
    pub image_folder: ImageSet,

    /// Fast or slow game?
    #[arg(short, long)]
    pub fast: bool,

    /// Seed for reproducible deals
    #[arg(long)]
    pub seed: Option<u64>,

    /// Resolve delay in milliseconds (overrides --fast)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

fn parse_image_folder(folder: &str) -> Result<ImageSet, MatchError> {
    ImageSet::from_folder(folder, DEFAULT_PAIRS)
}

impl Cli {
    /// Game configuration selected by the flags.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        let config = GameConfig::default();
        match (self.delay_ms, self.fast) {
            (Some(ms), _) => config.with_resolve_delay(Duration::from_millis(ms)),
            (None, true) => config.fast(),
            (None, false) => config,
        }
    }

    /// RNG for image selection and dealing.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}
