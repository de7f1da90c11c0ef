//! The proposer-to-responder assignment produced by a run.
//!
//! ## Matching Root
//!
//! [`Matching::root`] hashes the assignment in proposer order so two runs
//! (or two nodes) can compare results with a single 32-byte value.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::types::{ProposerId, ResponderId};

/// A complete assignment of proposers to responders.
///
/// Stored as a dense array indexed by proposer id.
///
/// ## Example
///
/// ```
/// use stable_match::types::Matching;
///
/// let matching = Matching::from_partners(vec![1, 0]);
/// assert_eq!(matching.partner_of(0), Some(1));
/// assert_eq!(matching.proposer_of(1), Some(0));
/// assert!(matching.is_bijective());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    /// `partners[m]` is the responder assigned to proposer `m`
    partners: Vec<ResponderId>,
}

impl Matching {
    /// Wrap a partner array indexed by proposer id
    pub fn from_partners(partners: Vec<ResponderId>) -> Self {
        Self { partners }
    }

    /// Number of matched pairs
    #[inline]
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Check if the matching has no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Responder assigned to `proposer`
    #[inline]
    pub fn partner_of(&self, proposer: ProposerId) -> Option<ResponderId> {
        self.partners.get(proposer).copied()
    }

    /// Proposer assigned to `responder` (linear scan)
    pub fn proposer_of(&self, responder: ResponderId) -> Option<ProposerId> {
        self.partners.iter().position(|&w| w == responder)
    }

    /// Iterate `(proposer, responder)` pairs in proposer order
    pub fn pairs(&self) -> impl Iterator<Item = (ProposerId, ResponderId)> + '_ {
        self.partners.iter().copied().enumerate()
    }

    /// Partner array indexed by proposer id
    pub fn partners(&self) -> &[ResponderId] {
        &self.partners
    }

    /// Proposer array indexed by responder id
    ///
    /// Returns None if the matching is not a bijection.
    pub fn inverse(&self) -> Option<Vec<ProposerId>> {
        let n = self.partners.len();
        let mut inverse = vec![None; n];
        for (m, w) in self.pairs() {
            match inverse.get_mut(w) {
                Some(slot) if slot.is_none() => *slot = Some(m),
                _ => return None,
            }
        }
        inverse.into_iter().collect()
    }

    /// Check that every responder appears exactly once
    pub fn is_bijective(&self) -> bool {
        self.inverse().is_some()
    }

    /// Ordered map view, convenient for comparisons and display
    pub fn to_map(&self) -> BTreeMap<ProposerId, ResponderId> {
        self.pairs().collect()
    }

    /// SHA-256 over the responder ids in proposer order (u64 little-endian)
    pub fn root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update((self.partners.len() as u64).to_le_bytes());
        for &w in &self.partners {
            hasher.update((w as u64).to_le_bytes());
        }
        let result = hasher.finalize();

        let mut root = [0u8; 32];
        root.copy_from_slice(&result);
        root
    }

    /// Matching root as a hex string
    pub fn root_hex(&self) -> String {
        hex::encode(self.root())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
