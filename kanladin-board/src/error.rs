//! Error types for the board client core

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur talking to the remote board store
#[derive(Debug, Error)]
pub enum BoardError {
    /// The full-board query failed
    #[error("board fetch failed: {message}")]
    Fetch { message: String },

    /// A mutating call failed
    #[error("{op} failed: {message}")]
    Mutation { op: String, message: String },

    /// No board exists on the remote store
    #[error("board not found")]
    BoardNotFound,

    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },
}

impl BoardError {
    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a mutation error
    pub fn mutation(op: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mutation {
            op: op.into(),
            message: message.into(),
        }
    }
}
