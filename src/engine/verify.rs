//! Stability checks for a matching against its instance.
//!
//! A pair `(m, w)` blocks a matching when `m` prefers `w` to its partner
//! and `w` prefers `m` to its partner. A matching with no blocking pair is
//! stable.

use crate::registry::AgentRegistry;
use crate::types::{Matching, ProposerId, ResponderId};

/// Every blocking pair of `matching`, in proposer-major order.
///
/// Only the responders a proposer ranks above its partner are checked, so
/// the scan is O(n^2) in the worst case.
///
/// Returns None if `matching` is not a perfect matching of the registry's
/// agents.
///
/// ## Example
///
/// ```
/// use stable_match::engine::blocking_pairs;
/// use stable_match::registry::AgentRegistry;
/// use stable_match::types::Matching;
///
/// let registry = AgentRegistry::from_rankings(
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![1, 0], vec![1, 0]],
/// ).unwrap();
///
/// // Proposer 1 and responder 0 both prefer each other here
/// let unstable = Matching::from_partners(vec![0, 1]);
/// assert_eq!(blocking_pairs(&registry, &unstable), Some(vec![(1, 0)]));
/// ```
pub fn blocking_pairs(
    registry: &AgentRegistry,
    matching: &Matching,
) -> Option<Vec<(ProposerId, ResponderId)>> {
    if matching.len() != registry.len() {
        return None;
    }
    let holders = matching.inverse()?;

    // A bijection of the right size only holds ids in 0..n
    let proposer_ranks = registry.proposer_ranks();
    let responder_ranks = registry.responder_ranks();

    let mut pairs = Vec::new();
    for (m, partner) in matching.pairs() {
        let proposer = registry.proposer(m)?;
        let better = &proposer.ranking[..proposer_ranks.position(m, partner)];
        for &w in better {
            if responder_ranks.prefers(w, m, holders[w]) {
                pairs.push((m, w));
            }
        }
    }
    Some(pairs)
}

/// Check that `matching` is a perfect matching with no blocking pair.
pub fn is_stable(registry: &AgentRegistry, matching: &Matching) -> bool {
    blocking_pairs(registry, matching).is_some_and(|pairs| pairs.is_empty())
}

// ============================================================================
// Unit Tests
// ============================================================================
