//! Plays Isolation between two configurable agents and prints the result.
//!
//! ```text
//! RUST_LOG=timed_minimax=debug cargo run --example isolation_match -- \
//!     '{"score": "mobility_difference"}' '{"score": "mild_mobility", "search_depth": 3}'
//! ```
//!
//! The first agent plays iterative deepening alpha-beta, the second fixed-depth
//! minimax. Each argument is a JSON agent config; omitted fields use defaults.

use std::time::Duration;
use timed_minimax::isolation::Board;
use timed_minimax::util::play_match;
use timed_minimax::AgentConfig;
use tracing_subscriber::EnvFilter;

const TIME_LIMIT: Duration = Duration::from_millis(150);

fn parse(arg: Option<String>) -> Result<AgentConfig, serde_json::Error> {
    match arg {
        Some(json) => serde_json::from_str(&json),
        None => Ok(AgentConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = std::env::args().skip(1);
    let first_config = parse(args.next())?;
    let second_config = parse(args.next())?;
    let mut first = first_config.alphabeta_player()?;
    let mut second = second_config.minimax_player()?;

    let outcome = play_match(Board::default(), &mut first, &mut second, TIME_LIMIT);

    let mut board = Board::default();
    for &m in &outcome.history {
        board.apply_move(m);
    }
    println!("{}", board);
    println!(
        "{:?} wins over {:?} after {} moves ({:?}).",
        outcome.winner,
        outcome.loser,
        outcome.history.len(),
        outcome.termination
    );
    println!("Last alpha-beta search:\n{}", first.stats());
    Ok(())
}
