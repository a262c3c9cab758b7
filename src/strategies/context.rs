//! State shared by every frame of a single search.

use crate::error::SearchTimeout;
use crate::interface::*;

/// Everything a recursive search needs besides the node itself: the
/// evaluator, the turn clock, the threshold below which no more work may
/// start, and the player the search is maximizing for.
///
/// A context is created per top-level search and passed by `&mut` through
/// every recursive call.
pub struct SearchContext<'a, G: Game, E> {
    evaluator: &'a E,
    time_left: &'a dyn Fn() -> f64,
    threshold: f64,
    player: G::Player,
    nodes: usize,
}

impl<'a, G: Game, E: Evaluator<G>> SearchContext<'a, G, E> {
    /// A context for searching on behalf of `player`.
    pub fn new(
        evaluator: &'a E, time_left: &'a dyn Fn() -> f64, threshold: f64, player: G::Player,
    ) -> Self {
        SearchContext { evaluator, time_left, threshold, player, nodes: 0 }
    }

    /// The maximizing player.
    pub fn player(&self) -> G::Player {
        self.player
    }

    /// Number of nodes that have passed a time check so far.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Poll the clock. Fails once the remaining time drops below the threshold.
    pub(super) fn check_time(&mut self) -> Result<(), SearchTimeout> {
        if (self.time_left)() < self.threshold {
            return Err(SearchTimeout);
        }
        self.nodes += 1;
        Ok(())
    }

    /// Polls the clock, then returns the moves to recurse into, or `None` if
    /// this node is a leaf: the depth limit is reached or the player to act
    /// cannot move.
    pub(super) fn expand(&mut self, state: &G, depth: usize) -> Result<Option<Vec<Move>>, SearchTimeout> {
        self.check_time()?;
        if depth == 0 {
            return Ok(None);
        }
        let moves = state.legal_moves();
        Ok(if moves.is_empty() { None } else { Some(moves) })
    }

    /// Score `state` for the searching player, whoever is to move.
    pub(super) fn score(&self, state: &G) -> Evaluation {
        self.evaluator.evaluate(state, self.player)
    }
}
