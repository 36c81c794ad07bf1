//! Engine Errors
//!
//! Contract-violation errors surfaced to the caller. Illegal moves and
//! unreachable pursuit goals are *not* errors; they are ordinary no-op
//! outcomes of the simulation.

use thiserror::Error;

/// Errors raised by the engine on bad input data or bad intents.
///
/// All variants signal a caller or data contract violation. The engine never
/// retries and never degrades; errors propagate unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A coordinate access landed outside the board.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Board width in cells.
        width: i32,
        /// Board height in cells.
        height: i32,
    },

    /// An intent referenced a player index the match does not have.
    #[error("intent references unknown player index {index}")]
    InvalidPlayer {
        /// The offending player index.
        index: usize,
    },

    /// Board data failed validation at load time.
    #[error("invalid board data: {reason}")]
    BoardData {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// A match was constructed from inconsistent pieces.
    #[error("invalid match setup: {reason}")]
    InvalidSetup {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Reading a board file from disk failed.
    #[error("i/o error reading board: {0}")]
    Io(#[from] std::io::Error),
}
