//! Heuristic evaluation policies.
//!
//! Each policy scores a state by comparing how many moves the given player
//! has against how many its opponent has. They differ only in weighting.

use super::interface::*;
use serde::{Deserialize, Serialize};

fn mobility<G: Game>(state: &G, player: G::Player) -> (f64, f64) {
    let own = state.legal_moves_for(player).len() as f64;
    let opp = state.legal_moves_for(state.opponent(player)).len() as f64;
    (own, opp)
}

/// Superlinear reward for own mobility, heavier penalty for the opponent's,
/// and a small pull toward the center of the board.
///
/// `own^1.5 - 2.5 * opp - 0.1 * squared_distance_to_center`
#[derive(Copy, Clone, Debug, Default)]
pub struct MobilityDifference;

impl<G: Game> Evaluator<G> for MobilityDifference {
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation {
        let (own, opp) = mobility(state, player);
        let center_distance = match state.player_location(player) {
            Some((row, col)) => {
                let w = state.width() as f64 / 2.;
                let h = state.height() as f64 / 2.;
                (h - row as f64).powi(2) + (w - col as f64).powi(2)
            }
            // Not on the board yet, so there is nothing to pull toward the center.
            None => 0.,
        };
        own.powf(1.5) - 2.5 * opp - 0.1 * center_distance
    }
}

/// `own - 2 * opp`
#[derive(Copy, Clone, Debug, Default)]
pub struct AggressiveMobility;

impl<G: Game> Evaluator<G> for AggressiveMobility {
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation {
        let (own, opp) = mobility(state, player);
        own - 2. * opp
    }
}

/// `own - 0.5 * opp`
#[derive(Copy, Clone, Debug, Default)]
pub struct MildMobility;

impl<G: Game> Evaluator<G> for MildMobility {
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation {
        let (own, opp) = mobility(state, player);
        own - 0.5 * opp
    }
}

/// Selects one of the built-in policies by name, e.g. from a config file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    #[default]
    MobilityDifference,
    AggressiveMobility,
    MildMobility,
}

impl<G: Game> Evaluator<G> for ScorePolicy {
    fn evaluate(&self, state: &G, player: G::Player) -> Evaluation {
        match *self {
            ScorePolicy::MobilityDifference => MobilityDifference.evaluate(state, player),
            ScorePolicy::AggressiveMobility => AggressiveMobility.evaluate(state, player),
            ScorePolicy::MildMobility => MildMobility.evaluate(state, player),
        }
    }
}
