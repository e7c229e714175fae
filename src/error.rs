//! Error types for puzzle solving and scoring.

use thiserror::Error;

/// Errors returned by solvers, game rounds, and configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The problem instance cannot be solved as given.
    ///
    /// Raised for negative capacity, weights or values, non-finite
    /// coordinates, duplicate identifiers, or a table too large to address.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// An item id that is not part of the current level.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// A city id that is not part of the current level.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A round was submitted before it could be scored: an empty knapsack
    /// selection or a tour that has not visited every city.
    #[error("cannot submit: {0}")]
    NotReady(String),

    /// A difficulty name that does not match any tier.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A game name that does not match any puzzle kind.
    #[error("unknown game: {0}")]
    UnknownGame(String),

    /// Scoring configuration could not be parsed or is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias for puzzle operations.
pub type Result<T> = std::result::Result<T, GameError>;
