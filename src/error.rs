//! Error types for search configuration and cancellation.

use thiserror::Error;

/// The turn clock fell below the timeout threshold.
///
/// This is cooperative cancellation, not a failure: it unwinds through every
/// search frame with `?` and is absorbed by the strategy that started the
/// search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("search timed out")]
pub struct SearchTimeout;

/// Rejected search configuration, reported before any search begins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A search depth or depth cap of zero.
    #[error("invalid {name}: {value} (must be at least 1)")]
    InvalidDepth { name: &'static str, value: usize },

    /// A timeout threshold that is not a positive, finite number of milliseconds.
    #[error("invalid timeout threshold: {0} ms (must be positive and finite)")]
    InvalidThreshold(f64),
}
