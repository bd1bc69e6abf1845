use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_four::arena::{self, OpponentKind};
use connect_four::config::AppConfig;

/// Pit the Connect Four engine against an opponent and report the results.
#[derive(Parser)]
#[command(name = "connect-four", about = "Run headless Connect Four engine matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the match seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Skip the opening book
    #[arg(long)]
    no_opening_book: bool,

    /// Print the match summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.arena.seed = seed;
    }
    if let Some(opponent) = cli.opponent {
        app_config.arena.opponent = opponent;
    }
    if cli.no_opening_book {
        app_config.engine.opening_book = false;
    }
    app_config.validate().context("invalid settings")?;

    let summary = arena::run_match(&app_config.arena, &app_config.engine)
        .context("running match")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} games: engine {} / opponent {} / draws {} ({:.1}% engine wins, {:.1} moves per game)",
            summary.games,
            summary.engine_wins,
            summary.opponent_wins,
            summary.draws,
            summary.engine_win_rate() * 100.0,
            summary.average_game_length,
        );
    }
    Ok(())
}
