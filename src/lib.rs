//! Deadline-aware game-tree search for two-player, perfect-information,
//! zero-sum games.
//!
//! Implement [`Game`] for your game state, pick or write an [`Evaluator`],
//! then ask a [`Strategy`] for a move with a clock that reports the
//! milliseconds left in the turn:
//!
//! ```
//! use timed_minimax::isolation::Board;
//! use timed_minimax::{AlphaBetaPlayer, ScorePolicy, SearchOptions, Strategy};
//!
//! let mut player = AlphaBetaPlayer::new(ScorePolicy::MobilityDifference, SearchOptions::new().with_max_depth(3)).unwrap();
//! let board = Board::new(5, 5);
//! let m = player.choose_move(&board, &|| 1000.);
//! assert!(!m.is_none());
//! ```

pub mod error;
pub mod evaluators;
pub mod interface;
pub mod isolation;
pub mod options;
pub mod strategies;
pub mod util;

pub use error::{ConfigError, SearchTimeout};
pub use evaluators::{AggressiveMobility, MildMobility, MobilityDifference, ScorePolicy};
pub use interface::{Evaluation, Evaluator, Game, Move, Strategy};
pub use options::{AgentConfig, SearchOptions};
pub use strategies::alphabeta::alphabeta;
pub use strategies::context::SearchContext;
pub use strategies::iterative::AlphaBetaPlayer;
pub use strategies::minimax::{minimax, MinimaxPlayer};
pub use strategies::random::Random;
pub use strategies::SearchStats;
