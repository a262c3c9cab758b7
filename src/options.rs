//! Configuration for the search strategies.

use crate::error::ConfigError;
use crate::evaluators::ScorePolicy;
use crate::strategies::iterative::AlphaBetaPlayer;
use crate::strategies::minimax::MinimaxPlayer;
use serde::{Deserialize, Serialize};

/// Options shared by the minimax and iterative deepening strategies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Plies searched by fixed-depth minimax.
    pub search_depth: usize,
    /// Remaining milliseconds below which no more search work is started.
    pub timeout_threshold_ms: f64,
    /// Deepest round iterative deepening will attempt, even if time remains.
    pub max_depth: usize,
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions { search_depth: 3, timeout_threshold_ms: 10., max_depth: 100 }
    }

    /// Plies searched by fixed-depth minimax.
    pub fn with_search_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    /// Stop searching once fewer than `ms` milliseconds remain. Should leave
    /// enough room to return before the clock expires.
    pub fn with_timeout_threshold(mut self, ms: f64) -> Self {
        self.timeout_threshold_ms = ms;
        self
    }

    /// Cap iterative deepening at `depth`, so that it terminates even with a
    /// clock that never runs out.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::InvalidDepth { name: "search depth", value: 0 });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidDepth { name: "max depth", value: 0 });
        }
        if !(self.timeout_threshold_ms.is_finite() && self.timeout_threshold_ms > 0.) {
            return Err(ConfigError::InvalidThreshold(self.timeout_threshold_ms));
        }
        Ok(())
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A whole agent: which built-in score policy to use and how to search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub score: ScorePolicy,
    #[serde(flatten)]
    pub options: SearchOptions,
}

impl AgentConfig {
    pub fn minimax_player(&self) -> Result<MinimaxPlayer<ScorePolicy>, ConfigError> {
        MinimaxPlayer::new(self.score, self.options)
    }

    pub fn alphabeta_player(&self) -> Result<AlphaBetaPlayer<ScorePolicy>, ConfigError> {
        AlphaBetaPlayer::new(self.score, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = SearchOptions::default();
        assert_eq!(opts.search_depth, 3);
        assert_eq!(opts.timeout_threshold_ms, 10.);
        assert_eq!(opts.max_depth, 100);
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_depth() {
        let err = SearchOptions::new().with_search_depth(0).validate().unwrap_err();
        assert_eq!(err, ConfigError::InvalidDepth { name: "search depth", value: 0 });
        assert!(SearchOptions::new().with_max_depth(0).validate().is_err());
        assert!(MinimaxPlayer::new(ScorePolicy::MildMobility, SearchOptions::new().with_search_depth(0)).is_err());
    }

    #[test]
    fn rejects_bad_threshold() {
        for ms in [0., -5., f64::NAN, f64::INFINITY] {
            let result = SearchOptions::new().with_timeout_threshold(ms).validate();
            assert!(matches!(result, Err(ConfigError::InvalidThreshold(_))), "{}", ms);
        }
        assert!(AlphaBetaPlayer::new(ScorePolicy::MildMobility, SearchOptions::new().with_timeout_threshold(0.)).is_err());
    }

    #[test]
    fn agent_from_json() {
        let config: AgentConfig =
            serde_json::from_str(r#"{"score": "mild_mobility", "search_depth": 5}"#).unwrap();
        assert_eq!(config.score, ScorePolicy::MildMobility);
        assert_eq!(config.options.search_depth, 5);
        assert_eq!(config.options.timeout_threshold_ms, 10.);
        assert_eq!(config.minimax_player().unwrap().options().search_depth, 5);

        let bad: AgentConfig = serde_json::from_str(r#"{"max_depth": 0}"#).unwrap();
        assert!(bad.alphabeta_player().is_err());
    }
}
