//! An implementation of iterative deepening alpha-beta.
//!
//! Search at depth 1, then start over at depth 2, then depth 3, etc. Keeps
//! going until the clock runs out or the depth cap is reached. Only rounds
//! that finish are trusted: when the clock stops a round, its partial result
//! is thrown away and the move from the previous round is returned.

use super::alphabeta::alphabeta;
use super::context::SearchContext;
use super::util::SearchStats;
use crate::error::{ConfigError, SearchTimeout};
use crate::interface::*;
use crate::options::SearchOptions;

use std::time::Instant;
use tracing::debug;

pub struct AlphaBetaPlayer<E> {
    evaluator: E,
    opts: SearchOptions,
    stats: SearchStats,
}

impl<E> AlphaBetaPlayer<E> {
    pub fn new(evaluator: E, opts: SearchOptions) -> Result<Self, ConfigError> {
        opts.validate()?;
        Ok(AlphaBetaPlayer { evaluator, opts, stats: SearchStats::default() })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.opts
    }

    /// Statistics for the last move chosen.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<G: Game, E: Evaluator<G>> Strategy<G> for AlphaBetaPlayer<E> {
    fn choose_move(&mut self, s: &G, time_left: &dyn Fn() -> f64) -> Move {
        let start_time = Instant::now();
        self.stats = SearchStats::default();
        let player = s.active_player();
        let mut best_move = Move::NONE;

        for depth in 1..=self.opts.max_depth {
            let mut ctx = SearchContext::<G, E>::new(
                &self.evaluator,
                time_left,
                self.opts.timeout_threshold_ms,
                player,
            );
            match alphabeta(&mut ctx, s, depth, f64::NEG_INFINITY, f64::INFINITY) {
                Ok(m) => {
                    best_move = m;
                    self.stats.completed_depth = depth;
                    self.stats.nodes_explored += ctx.nodes();
                    debug!(depth, %m, nodes = ctx.nodes(), "completed search round");
                    if m.is_none() {
                        // No legal moves at the root; deeper rounds cannot help.
                        break;
                    }
                }
                Err(SearchTimeout) => {
                    // Keep the move from the previous depth.
                    self.stats.timed_out = true;
                    self.stats.abandoned_nodes = ctx.nodes();
                    debug!(depth, %best_move, nodes = ctx.nodes(), "search round timed out");
                    break;
                }
            }
        }
        self.stats.wall_time = start_time.elapsed();
        best_move
    }
}
