//! Error types for the search engine

use reversi::GameError;
use thiserror::Error;

/// Errors that can occur while choosing a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A generated move failed to apply: the generator and `apply_move`
    /// disagree, which is a defect rather than bad input
    #[error("Move generation error: {0}")]
    Game(#[from] GameError),

    /// Search configuration rejected by `SearchConfig::validate`
    #[error("Invalid search configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
