use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use match_it::assets::image_label;
use match_it::cli::Cli;
use match_it::console::{self, Console};
use match_it::game::{MatchGame, Session};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Stdout belongs to the board.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.game_config();
    let mut rng = cli.rng();

    tracing::info!(
        seed = rng.seed(),
        color = cli.color.name(),
        folder = %cli.image_folder.folder().display(),
        images = cli.image_folder.len(),
        delay_ms = config.resolve_delay.as_millis() as u64,
        "starting match-it"
    );

    let labels = cli
        .image_folder
        .pick(config.pairs, &mut rng)
        .iter()
        .map(|path| image_label(path))
        .collect();

    let game = MatchGame::new(config, rng).context("failed to start game")?;
    let console = Console::new(io::stdout().lock(), cli.color, labels);
    let mut session = Session::new(game, console);

    console::run(&mut session, io::stdin().lock(), std::thread::sleep)
        .context("console I/O failed")?;

    Ok(())
}
