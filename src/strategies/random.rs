//! A strategy that randomly chooses a move, for use as a baseline opponent.

use crate::interface::*;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct Random<R> {
    rng: R,
}

impl Random<rand::rngs::ThreadRng> {
    pub fn new() -> Self {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Random<R> {
    /// Use `rng`, e.g. a seeded one for reproducible games.
    pub fn with_rng(rng: R) -> Self {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, s: &G, _time_left: &dyn Fn() -> f64) -> Move {
        s.legal_moves().choose(&mut self.rng).copied().unwrap_or(Move::NONE)
    }
}
