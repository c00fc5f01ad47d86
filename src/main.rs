//! pawnstorm UCI chess engine

use clap::{Parser, Subcommand};
use pawnstorm::config::EngineConfig;
use pawnstorm::engine::search::{Searcher, DEFAULT_MAX_PLY, MAX_DEPTH};
use pawnstorm::error::EngineResult;
use pawnstorm::play::self_play;
use pawnstorm::uci::UCI;
use pawnstorm::Game;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pawnstorm", version, about = "Capture-counting chess engine speaking UCI")]
struct Cli {
    /// Plies searched below the root
    #[arg(long, default_value_t = DEFAULT_MAX_PLY, value_parser = clap::value_parser!(u32).range(0..=MAX_DEPTH as i64))]
    depth: u32,

    /// Fix the tie-break seed (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Search the full tree without alpha-beta pruning
    #[arg(long)]
    no_alpha_beta: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Speak UCI on stdin/stdout (the default)
    Uci,
    /// Let the engine play itself from the initial position
    SelfPlay {
        /// Stop after this many plies
        #[arg(long, default_value_t = 40)]
        plies: u32,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pawnstorm: {} at {}", err.kind(), err.location());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> EngineResult<()> {
    let config = EngineConfig {
        max_ply: cli.depth,
        alpha_beta: !cli.no_alpha_beta,
        seed: cli.seed,
    };
    info!(?config, "starting");

    match cli.command.unwrap_or(Command::Uci) {
        Command::Uci => UCI::new(config).run(),
        Command::SelfPlay { plies } => {
            let mut game = Game::new();
            let mut searcher = Searcher::new(config.rng_seed());
            let mut stdout = std::io::stdout();
            let outcome = self_play(&mut game, &mut searcher, &config.limits(), plies, &mut stdout)?;
            println!("{}", game);
            println!("{}", outcome);
            Ok(())
        }
    }
}
