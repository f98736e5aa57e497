use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use rust_nim::config::AppConfig;
use rust_nim::core::{GameMode, GameRng};
use rust_nim::error::ShellError;
use rust_nim::session::GameSession;
use rust_nim::strategy::StrategyChoice;
use rust_nim::ui::Shell;

/// Play Nim against the computer.
#[derive(Parser, Debug)]
#[command(name = "rust-nim", version, about)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, default_value = "rust-nim.toml")]
    config: PathBuf,

    /// Heap layout: single or multi.
    #[arg(long)]
    mode: Option<GameMode>,

    /// Computer strategy: expert or novice.
    #[arg(long)]
    strategy: Option<StrategyChoice>,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Show a nim-sum hint before each of your moves.
    #[arg(long)]
    hints: bool,

    /// Print the default config as TOML and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ShellError> {
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.show_hints |= cli.hints;

    let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("starting with seed {}", rng.seed());

    let session = GameSession::new_game(config.mode, config.strategy, rng);
    let mut shell = Shell::new(session, io::stdin().lock(), io::stdout())
        .with_computer_delay(config.computer_delay())
        .with_hints(config.show_hints);
    shell.run()
}
