//! Utility functions for driving matches between strategies.

use super::interface::{Game, Move, Strategy};
use std::time::{Duration, Instant};
use tracing::info;

/// A turn clock: milliseconds left until `limit` has elapsed since `start`.
/// Goes negative once the turn is over.
pub fn time_left_from(start: Instant, limit: Duration) -> impl Fn() -> f64 {
    let limit_ms = limit.as_secs_f64() * 1000.;
    move || limit_ms - start.elapsed().as_secs_f64() * 1000.
}

/// How a match ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The loser had no legal moves on their turn.
    NoLegalMoves,
    /// The loser returned after their turn clock ran out.
    Timeout,
    /// The loser returned a move that is not legal, including `Move::NONE`
    /// while legal moves remained.
    IllegalMove,
}

#[derive(Clone, Debug)]
pub struct MatchOutcome<P> {
    pub winner: P,
    pub loser: P,
    /// Every accepted move, in order.
    pub history: Vec<Move>,
    pub termination: Termination,
}

/// Play a complete game from `state` with the two strategies taking turns.
/// `first` plays for the player to act in `state`.
///
/// Each turn gets a fresh clock of `time_limit`.
pub fn play_match<G: Game>(
    mut state: G, first: &mut dyn Strategy<G>, second: &mut dyn Strategy<G>,
    time_limit: Duration,
) -> MatchOutcome<G::Player> {
    let mut strategies: [&mut dyn Strategy<G>; 2] = [first, second];
    let mut history = Vec::new();
    let mut s = 0;
    loop {
        let player = state.active_player();
        let legal = state.legal_moves();
        let termination = if legal.is_empty() {
            Some(Termination::NoLegalMoves)
        } else {
            let time_left = time_left_from(Instant::now(), time_limit);
            let m = strategies[s].choose_move(&state, &time_left);
            if time_left() < 0. {
                Some(Termination::Timeout)
            } else if !legal.contains(&m) {
                Some(Termination::IllegalMove)
            } else {
                history.push(m);
                state = state.forecast_move(m);
                None
            }
        };
        if let Some(termination) = termination {
            let winner = state.opponent(player);
            info!(?winner, loser = ?player, ?termination, moves = history.len(), "match over");
            return MatchOutcome { winner, loser: player, history, termination };
        }
        s = 1 - s;
    }
}
