//! Match receipt summarizing a completed run.
//!
//! The receipt is the compact, deterministic record of a run: how many
//! agents were matched, how much proposal work it took, and the root of
//! the resulting matching.

use ssz_rs::prelude::*;

/// Summary of a matching run.
///
/// ## Matching Root
///
/// The 32-byte root is [`crate::types::Matching::root`]: SHA-256 over the
/// responder ids in proposer order. Two runs on the same instance always
/// produce the same root.
///
/// ## Example
///
/// ```
/// use stable_match::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(
///     4,          // agents per side
///     6,          // proposals
///     2,          // rejections
///     [0u8; 32],  // matching_root (would be computed)
/// );
/// assert_eq!(receipt.rejection_rate(), Some(2.0 / 6.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of agents on each side
    pub agents: u64,

    /// Number of proposal events in the run
    pub proposals: u64,

    /// Number of rejections (including displacements)
    pub rejections: u64,

    /// Root of the final matching (SHA-256, 32 bytes)
    pub matching_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new match receipt
    pub fn new(agents: u64, proposals: u64, rejections: u64, matching_root: [u8; 32]) -> Self {
        Self {
            agents,
            proposals,
            rejections,
            matching_root,
        }
    }

    /// Get the matching root as a hex string
    pub fn matching_root_hex(&self) -> String {
        hex::encode(self.matching_root)
    }

    /// Check if this receipt describes an empty instance
    pub fn is_empty(&self) -> bool {
        self.agents == 0
    }

    /// Fraction of proposals that ended in a rejection
    ///
    /// Returns None if no proposals were made.
    pub fn rejection_rate(&self) -> Option<f64> {
        if self.proposals == 0 {
            None
        } else {
            Some(self.rejections as f64 / self.proposals as f64)
        }
    }

    /// Encode the receipt with SSZ
    pub fn to_bytes(&self) -> Result<Vec<u8>, SerializeError> {
        ssz_rs::serialize(self)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
