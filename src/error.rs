//! Error types for instance validation and matching runs.
//!
//! ## Taxonomy
//!
//! - [`MatchError::InvalidInstance`]: the input preference lists violate a
//!   structural precondition. Detected before any proposal is made.
//! - [`MatchError::ExhaustedPreferences`]: a proposer ran out of candidates
//!   while unmatched. Cannot happen for a valid square instance.
//!
//! Neither is transient: the run is deterministic, so retrying the same
//! input reproduces the same failure.

use thiserror::Error;

use crate::types::{ProposerId, Side};

/// Errors surfaced by [`crate::AgentRegistry`] and [`crate::Matcher`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Structural precondition violated
    #[error("invalid instance: {0}")]
    InvalidInstance(#[from] InstanceError),

    /// A proposer consumed its whole ranking without securing a match
    #[error("proposer {proposer} exhausted its preferences without a match")]
    ExhaustedPreferences {
        /// The proposer left unmatched
        proposer: ProposerId,
    },
}

/// The specific structural defect found in an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// The two sets have different sizes
    #[error("{proposers} proposers but {responders} responders")]
    SizeMismatch {
        proposers: usize,
        responders: usize,
    },

    /// An agent id lies outside `0..len`
    #[error("{side} id {id} is out of range for {len} agents")]
    IdOutOfRange { side: Side, id: usize, len: usize },

    /// Two agents on the same side share an id
    #[error("{side} id {id} supplied more than once")]
    DuplicateId { side: Side, id: usize },

    /// A ranking does not list every agent of the opposite side
    #[error("{side} {id} ranks {actual} candidates, expected {expected}")]
    RankingLength {
        side: Side,
        id: usize,
        expected: usize,
        actual: usize,
    },

    /// A ranking names an id the opposite side does not have
    #[error("{side} {id} ranks unknown candidate {candidate}")]
    UnknownCandidate {
        side: Side,
        id: usize,
        candidate: usize,
    },

    /// A ranking names the same candidate twice
    #[error("{side} {id} ranks candidate {candidate} more than once")]
    RepeatedCandidate {
        side: Side,
        id: usize,
        candidate: usize,
    },
}

impl MatchError {
    /// Returns true for input-validation failures
    pub fn is_invalid_instance(&self) -> bool {
        matches!(self, MatchError::InvalidInstance(_))
    }
}
