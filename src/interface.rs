//! The common structures and traits.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};

/// An assessment of a game state from the perspective of the searching player.
/// Higher values mean a more favorable state.
pub type Evaluation = f64;

/// A move on a two-dimensional board, given as `(row, col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// No legal move, or no result available. Never a legal move on a real
    /// board.
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Move { row, col }
    }

    /// Whether this is the `NONE` sentinel.
    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move { row, col }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Defines the rules of a two-player, perfect-knowledge, zero-sum game.
///
/// A game state is an immutable snapshot: applying a move produces a new
/// state through `forecast_move` and never mutates the receiver.
pub trait Game: Clone {
    /// Identifies one of the two participants.
    type Player: Copy + Eq + Debug;

    /// The player whose turn it is.
    fn active_player(&self) -> Self::Player;

    /// Legal moves for `player`. An empty list means that player cannot move.
    fn legal_moves_for(&self, player: Self::Player) -> Vec<Move>;

    /// Legal moves for the player to act.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    /// The state after the active player makes `m`.
    fn forecast_move(&self, m: Move) -> Self;

    /// The other participant.
    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Where `player` stands as `(row, col)`, or `None` if not yet placed.
    fn player_location(&self, player: Self::Player) -> Option<(i32, i32)>;

    fn width(&self) -> i32;

    fn height(&self) -> i32;
}

/// Scores a game state from the point of view of a given player.
///
/// Implementations must be pure: evaluating the same `(state, player)` pair
/// twice yields the same value and leaves the state untouched.
pub trait Evaluator<G: Game> {
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation;
}

impl<G, F> Evaluator<G> for F
where
    G: Game,
    F: Fn(&G, G::Player) -> Evaluation,
{
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation {
        self(state, player)
    }
}

/// Defines a method of choosing a move for the player to act.
///
/// `time_left` reports the milliseconds remaining in the current turn and is
/// polled, never pushed. Returns `Move::NONE` if no move could be chosen.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, state: &G, time_left: &dyn Fn() -> f64) -> Move;
}
