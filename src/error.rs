//! Error types for matching operations.
//!
//! Sparse or empty text is never an error; only broken call contracts and
//! I/O at the command-line boundary are.

use thiserror::Error;

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug)]
pub enum MatchError {
    /// The query document has no identifier
    #[error("query document identifier is empty")]
    EmptyQueryId,

    /// A candidate document has no identifier
    #[error("candidate at position {index} has an empty identifier")]
    EmptyCandidateId { index: usize },

    /// Two candidates share an identifier
    #[error("candidate identifier {id:?} appears more than once")]
    DuplicateCandidateId { id: String },

    /// A request payload carries no query
    #[error("request has no query document")]
    MissingQuery,

    /// A request payload carries no candidate list
    #[error("request has no candidate list")]
    MissingCandidates,

    /// Configuration could not be parsed or is out of range
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CBOR encoding failed
    #[error("cbor error: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

impl MatchError {
    /// Returns true if the caller broke the ranking call contract.
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            MatchError::EmptyQueryId
                | MatchError::EmptyCandidateId { .. }
                | MatchError::DuplicateCandidateId { .. }
                | MatchError::MissingQuery
                | MatchError::MissingCandidates
        )
    }
}
