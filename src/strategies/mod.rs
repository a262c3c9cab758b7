//! Strategy implementations.

pub mod alphabeta;
pub mod context;
pub mod iterative;
pub mod minimax;
pub mod random;
mod util;

pub use util::SearchStats;
