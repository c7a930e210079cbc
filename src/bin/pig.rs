//! Play Pig at the terminal.
//!
//! Exits 0 when the players decline a replay or someone quits, 1 on a setup
//! or console error. Set `RUST_LOG=debug` to trace turns on stderr.

use std::process::ExitCode;

use clap::Parser;
use rust_pig::core::DEFAULT_PLAYER_COUNT;
use rust_pig::{GameConfig, SessionEnd, TerminalTable};

#[derive(Parser, Debug)]
#[command(name = "pig", about = "Play the game of Pig.")]
struct Args {
    /// Number of players in the game
    #[arg(
        short = 'n',
        long = "num-players",
        visible_alias = "numPlayers",
        default_value_t = DEFAULT_PLAYER_COUNT,
        allow_negative_numbers = true
    )]
    num_players: i64,

    /// Seed the die for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::new()
        .player_count(args.num_players)
        .seed(args.seed);

    let mut engine = match rust_pig::setup(&config) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("setup failed: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut table = TerminalTable::stdio();
    match engine.run_session(&mut table) {
        Ok(SessionEnd::Quit) => {
            log::info!("quit requested, exiting");
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::Finished { games_played }) => {
            log::info!("session over after {} game(s)", games_played);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("session aborted: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
