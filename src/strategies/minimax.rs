//! Fixed-depth minimax.
//!
//! Searches every line to exactly the configured depth, with no pruning. The
//! searching player moves at the root; MIN and MAX layers alternate below it.

use super::context::SearchContext;
use super::util::SearchStats;
use crate::error::{ConfigError, SearchTimeout};
use crate::interface::*;
use crate::options::SearchOptions;

use std::time::Instant;
use tracing::{debug, trace};

fn min_value<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize,
) -> Result<Evaluation, SearchTimeout> {
    let moves = match ctx.expand(s, depth)? {
        Some(moves) => moves,
        None => return Ok(ctx.score(s)),
    };
    let mut v = f64::INFINITY;
    for m in moves {
        v = v.min(max_value(ctx, &s.forecast_move(m), depth - 1)?);
    }
    Ok(v)
}

fn max_value<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize,
) -> Result<Evaluation, SearchTimeout> {
    let moves = match ctx.expand(s, depth)? {
        Some(moves) => moves,
        None => return Ok(ctx.score(s)),
    };
    let mut v = f64::NEG_INFINITY;
    for m in moves {
        v = v.max(min_value(ctx, &s.forecast_move(m), depth - 1)?);
    }
    Ok(v)
}

/// Choose the move for the player to act in `s` that maximizes their
/// guaranteed score `depth` plies ahead.
///
/// Ties go to the first best move in enumeration order. Returns `Move::NONE`
/// without recursing if there are no legal moves.
pub fn minimax<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize,
) -> Result<Move, SearchTimeout> {
    debug_assert!(depth >= 1, "search depth must be at least 1");
    ctx.check_time()?;

    let mut best_move = Move::NONE;
    let mut best_score = f64::NEG_INFINITY;
    for m in s.legal_moves() {
        let v = min_value(ctx, &s.forecast_move(m), depth.saturating_sub(1))?;
        trace!(%m, value = v, "root candidate");
        // Strictly better than any move found so far.
        if v > best_score {
            best_move = m;
            best_score = v;
        }
    }
    Ok(best_move)
}

/// Plays by fixed-depth minimax.
///
/// If the clock runs out before the search finishes there is nothing to fall
/// back to, and `Move::NONE` is returned.
pub struct MinimaxPlayer<E> {
    evaluator: E,
    opts: SearchOptions,
    stats: SearchStats,
}

impl<E> MinimaxPlayer<E> {
    pub fn new(evaluator: E, opts: SearchOptions) -> Result<Self, ConfigError> {
        opts.validate()?;
        Ok(MinimaxPlayer { evaluator, opts, stats: SearchStats::default() })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.opts
    }

    /// Statistics for the last move chosen.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl<G: Game, E: Evaluator<G>> Strategy<G> for MinimaxPlayer<E> {
    fn choose_move(&mut self, s: &G, time_left: &dyn Fn() -> f64) -> Move {
        let start_time = Instant::now();
        let depth = self.opts.search_depth;
        let mut ctx = SearchContext::<G, E>::new(
            &self.evaluator,
            time_left,
            self.opts.timeout_threshold_ms,
            s.active_player(),
        );
        let result = minimax(&mut ctx, s, depth);

        self.stats = SearchStats::default();
        let best_move = match result {
            Ok(m) => {
                self.stats.completed_depth = depth;
                self.stats.nodes_explored = ctx.nodes();
                m
            }
            Err(SearchTimeout) => {
                debug!(depth, nodes = ctx.nodes(), "minimax timed out");
                self.stats.timed_out = true;
                self.stats.abandoned_nodes = ctx.nodes();
                Move::NONE
            }
        };
        self.stats.wall_time = start_time.elapsed();
        best_move
    }
}
