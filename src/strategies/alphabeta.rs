//! Depth-limited minimax with alpha-beta pruning.
//!
//! Chooses the same move as `minimax` at the same depth, but skips subtrees
//! that provably cannot change the choice.

use super::context::SearchContext;
use crate::error::SearchTimeout;
use crate::interface::*;

use tracing::trace;

fn min_value<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize, alpha: Evaluation, mut beta: Evaluation,
) -> Result<Evaluation, SearchTimeout> {
    let moves = match ctx.expand(s, depth)? {
        Some(moves) => moves,
        None => return Ok(ctx.score(s)),
    };
    let mut v = f64::INFINITY;
    for m in moves {
        v = v.min(max_value(ctx, &s.forecast_move(m), depth - 1, alpha, beta)?);
        // The MAX ancestor already has something at least this good.
        if v <= alpha {
            return Ok(v);
        }
        beta = beta.min(v);
    }
    Ok(v)
}

fn max_value<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize, mut alpha: Evaluation, beta: Evaluation,
) -> Result<Evaluation, SearchTimeout> {
    let moves = match ctx.expand(s, depth)? {
        Some(moves) => moves,
        None => return Ok(ctx.score(s)),
    };
    let mut v = f64::NEG_INFINITY;
    for m in moves {
        v = v.max(min_value(ctx, &s.forecast_move(m), depth - 1, alpha, beta)?);
        if v >= beta {
            return Ok(v);
        }
        alpha = alpha.max(v);
    }
    Ok(v)
}

/// Choose the move for the player to act in `s`, searching `depth` plies
/// within the `(alpha, beta)` window. Call with `f64::NEG_INFINITY` and
/// `f64::INFINITY` for a full-width result.
///
/// The root never cuts off on its own bound; `alpha` is only raised so that
/// later root children prune more. Ties go to the first best move in
/// enumeration order. Returns `Move::NONE` without recursing if there are no
/// legal moves.
pub fn alphabeta<G: Game, E: Evaluator<G>>(
    ctx: &mut SearchContext<G, E>, s: &G, depth: usize, mut alpha: Evaluation, beta: Evaluation,
) -> Result<Move, SearchTimeout> {
    debug_assert!(depth >= 1, "search depth must be at least 1");
    ctx.check_time()?;

    let mut best_move = Move::NONE;
    let mut best_score = f64::NEG_INFINITY;
    for m in s.legal_moves() {
        let v = min_value(ctx, &s.forecast_move(m), depth.saturating_sub(1), alpha, beta)?;
        trace!(%m, value = v, "root candidate");
        alpha = alpha.max(v);
        if v > best_score {
            best_move = m;
            best_score = v;
        }
    }
    Ok(best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::MildMobility;
    use crate::isolation::Board;
    use crate::strategies::minimax::minimax;

    fn no_deadline() -> f64 {
        f64::INFINITY
    }

    #[test]
    fn prunes_nodes_on_open_board() {
        let mut b = Board::new(5, 5);
        b.apply_move(Move::new(2, 2));
        b.apply_move(Move::new(0, 0));
        let player = crate::interface::Game::active_player(&b);

        let mut plain = SearchContext::<Board, _>::new(&MildMobility, &no_deadline, 10., player);
        let expected = minimax(&mut plain, &b, 4).unwrap();

        let mut pruned = SearchContext::<Board, _>::new(&MildMobility, &no_deadline, 10., player);
        let m = alphabeta(&mut pruned, &b, 4, f64::NEG_INFINITY, f64::INFINITY).unwrap();

        assert_eq!(m, expected);
        assert!(pruned.nodes() < plain.nodes(), "{} >= {}", pruned.nodes(), plain.nodes());
    }

    #[test]
    fn no_legal_moves_polls_once() {
        let mut b = Board::new(3, 3);
        b.apply_move(Move::new(1, 1));
        b.apply_move(Move::new(0, 0));
        let player = crate::interface::Game::active_player(&b);
        let polls = std::cell::Cell::new(0);
        let clock = || {
            polls.set(polls.get() + 1);
            1000.
        };
        let mut ctx = SearchContext::<Board, _>::new(&MildMobility, &clock, 10., player);
        let m = alphabeta(&mut ctx, &b, 3, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(m, Ok(Move::NONE));
        assert_eq!(polls.get(), 1);
    }
}
