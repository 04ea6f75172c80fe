use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use connect_four::ai::{HumanAgent, ThreatAgent, Tiebreak};
use connect_four::config::{AgentKind, AppConfig};
use connect_four::session::{GameSession, SessionConfig};

/// Play Connect Four against another person or the computer.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Who plays X: human, search, threat or random
    #[arg(long)]
    x: Option<AgentKind>,

    /// Who plays O: human, search, threat or random
    #[arg(long)]
    o: Option<AgentKind>,

    /// Search depth for X
    #[arg(long)]
    x_ply: Option<usize>,

    /// Search depth for O
    #[arg(long)]
    o_ply: Option<usize>,

    /// Tiebreak for both sides: left, right or random
    #[arg(long)]
    tiebreak: Option<Tiebreak>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Print each computer player's column scores before it moves
    #[arg(long)]
    show_scores: bool,

    /// Never replace a chosen move with a random one
    #[arg(long)]
    no_random: bool,

    /// Seed every random choice for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Classic hosted game: you play X against the one-ply threat player
    #[arg(long)]
    host: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    apply_overrides(&mut config, &cli);
    config.validate().context("validating command line overrides")?;

    let board = config.board.build().context("building board")?;
    let stdout = std::io::stdout();

    if cli.host {
        println!("Welcome to Connect four!");
        let session_config = SessionConfig {
            random_move_chance: 0.0,
            ..config.game
        };
        let mut session = GameSession::new(
            board,
            Box::new(HumanAgent::stdio()),
            Box::new(ThreatAgent),
            session_config,
            stdout,
        );
        session.play().context("playing hosted game")?;
        return Ok(());
    }

    let seed = config.game.seed;
    let x = config.x.build_agent(seed.map(|s| s.wrapping_add(1)));
    let o = config.o.build_agent(seed.map(|s| s.wrapping_add(2)));
    info!("X: {:?}, O: {:?}", config.x, config.o);

    let mut session = GameSession::new(board, x, o, config.game, stdout);
    session.play().context("playing game")?;
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(kind) = cli.x {
        config.x.kind = kind;
    }
    if let Some(kind) = cli.o {
        config.o.kind = kind;
    }
    if let Some(ply) = cli.x_ply {
        config.x.ply = ply;
    }
    if let Some(ply) = cli.o_ply {
        config.o.ply = ply;
    }
    if let Some(tiebreak) = cli.tiebreak {
        config.x.tiebreak = tiebreak;
        config.o.tiebreak = tiebreak;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if cli.show_scores {
        config.game.show_scores = true;
    }
    if cli.no_random {
        config.game.random_move_chance = 0.0;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
}
