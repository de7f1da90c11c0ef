//! Agent registry: the validated, immutable half of a matching instance.
//!
//! ## Architecture
//!
//! - **Agents**: proposers and responders stored by id (`agents[id]`)
//! - **RankTable**: inverse rankings for O(1) preference comparison
//!
//! Validation is eager. A registry either holds a complete square instance
//! with strict total rankings on both sides, or it was never built.
//!
//! ## Example
//!
//! ```
//! use stable_match::registry::AgentRegistry;
//!
//! let registry = AgentRegistry::from_rankings(
//!     vec![vec![0, 1], vec![1, 0]],
//!     vec![vec![1, 0], vec![0, 1]],
//! ).unwrap();
//!
//! assert_eq!(registry.len(), 2);
//! assert_eq!(registry.responder_prefers(0, 1, 0), Some(true));
//! assert_eq!(registry.responder_rank(0, 2), None);
//! ```

use tracing::{debug, warn};

use crate::error::{InstanceError, MatchError};
use crate::registry::RankTable;
use crate::types::{Agent, Proposer, ProposerId, Responder, ResponderId};

/// Immutable identities and rankings for both sides of an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRegistry {
    /// Proposers indexed by id
    proposers: Vec<Proposer>,

    /// Responders indexed by id
    responders: Vec<Responder>,

    /// `proposer_ranks.position(m, w)`: where `m` ranks `w`
    proposer_ranks: RankTable,

    /// `responder_ranks.position(w, m)`: where `w` ranks `m`
    responder_ranks: RankTable,
}

impl AgentRegistry {
    /// Validate an instance and build its lookup tables
    ///
    /// Agents may arrive in any order; they are re-indexed by id.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidInstance`] if the sides differ in size, an id is
    /// missing, repeated or out of range, or a ranking is not a permutation
    /// of the opposite side's ids.
    pub fn new(proposers: Vec<Proposer>, responders: Vec<Responder>) -> Result<Self, MatchError> {
        match Self::build(proposers, responders) {
            Ok(registry) => {
                debug!(agents = registry.len(), "registry built");
                Ok(registry)
            }
            Err(err) => {
                warn!(%err, "rejected matching instance");
                Err(err.into())
            }
        }
    }

    /// Build a registry from bare rankings, assigning `id = index`
    pub fn from_rankings(
        proposer_rankings: Vec<Vec<ResponderId>>,
        responder_rankings: Vec<Vec<ProposerId>>,
    ) -> Result<Self, MatchError> {
        Self::new(
            Proposer::from_rankings(proposer_rankings),
            Responder::from_rankings(responder_rankings),
        )
    }

    /// Build a registry without validating rankings.
    ///
    /// Rankings may be short but must only name ids in `0..n`.
    #[cfg(test)]
    pub(crate) fn unchecked(
        proposer_rankings: Vec<Vec<ResponderId>>,
        responder_rankings: Vec<Vec<ProposerId>>,
    ) -> Self {
        let n = proposer_rankings.len();
        let proposers = Proposer::from_rankings(proposer_rankings);
        let responders = Responder::from_rankings(responder_rankings);
        let proposer_ranks = RankTable::from_rankings(proposers.iter().map(Agent::ranking), n);
        let responder_ranks = RankTable::from_rankings(responders.iter().map(Agent::ranking), n);

        Self {
            proposers,
            responders,
            proposer_ranks,
            responder_ranks,
        }
    }

    fn build(proposers: Vec<Proposer>, responders: Vec<Responder>) -> Result<Self, InstanceError> {
        if proposers.len() != responders.len() {
            return Err(InstanceError::SizeMismatch {
                proposers: proposers.len(),
                responders: responders.len(),
            });
        }

        let proposers = index_by_id(proposers)?;
        let responders = index_by_id(responders)?;
        let n = proposers.len();

        let proposer_ranks = RankTable::from_rankings(proposers.iter().map(Agent::ranking), n);
        let responder_ranks = RankTable::from_rankings(responders.iter().map(Agent::ranking), n);

        Ok(Self {
            proposers,
            responders,
            proposer_ranks,
            responder_ranks,
        })
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of agents on each side
    #[inline]
    pub fn len(&self) -> usize {
        self.proposers.len()
    }

    /// Check if the instance is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.proposers.is_empty()
    }

    // ========================================================================
    // Agent Access
    // ========================================================================

    /// All proposers, indexed by id
    pub fn proposers(&self) -> &[Proposer] {
        &self.proposers
    }

    /// All responders, indexed by id
    pub fn responders(&self) -> &[Responder] {
        &self.responders
    }

    /// Get a proposer by id
    #[inline]
    pub fn proposer(&self, id: ProposerId) -> Option<&Proposer> {
        self.proposers.get(id)
    }

    /// Get a responder by id
    #[inline]
    pub fn responder(&self, id: ResponderId) -> Option<&Responder> {
        self.responders.get(id)
    }

    /// Responder at position `cursor` in proposer `m`'s ranking
    ///
    /// Returns None once the cursor has run past the end of the ranking.
    #[inline]
    pub fn proposer_choice(&self, m: ProposerId, cursor: usize) -> Option<ResponderId> {
        self.proposers.get(m)?.ranking.get(cursor).copied()
    }

    // ========================================================================
    // Preference Comparison
    // ========================================================================

    /// Position of responder `w` in proposer `m`'s ranking
    ///
    /// Returns None if either id is not in `0..len()`.
    #[inline]
    pub fn proposer_rank(&self, m: ProposerId, w: ResponderId) -> Option<usize> {
        self.proposer_ranks.get(m, w)
    }

    /// Position of proposer `m` in responder `w`'s ranking
    ///
    /// Returns None if either id is not in `0..len()`.
    #[inline]
    pub fn responder_rank(&self, w: ResponderId, m: ProposerId) -> Option<usize> {
        self.responder_ranks.get(w, m)
    }

    /// Does proposer `m` strictly prefer `candidate` over `incumbent`?
    ///
    /// Returns None if any id is not in `0..len()`.
    #[inline]
    pub fn proposer_prefers(
        &self,
        m: ProposerId,
        candidate: ResponderId,
        incumbent: ResponderId,
    ) -> Option<bool> {
        self.proposer_ranks.compare(m, candidate, incumbent)
    }

    /// Does responder `w` strictly prefer `candidate` over `incumbent`?
    ///
    /// Returns None if any id is not in `0..len()`.
    #[inline]
    pub fn responder_prefers(
        &self,
        w: ResponderId,
        candidate: ProposerId,
        incumbent: ProposerId,
    ) -> Option<bool> {
        self.responder_ranks.compare(w, candidate, incumbent)
    }

    /// Proposer-side table for in-crate callers whose ids are already in range
    #[inline]
    pub(crate) fn proposer_ranks(&self) -> &RankTable {
        &self.proposer_ranks
    }

    /// Responder-side table for in-crate callers whose ids are already in range
    #[inline]
    pub(crate) fn responder_ranks(&self) -> &RankTable {
        &self.responder_ranks
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Place each agent at `slots[id]`, validating ids and rankings.
fn index_by_id<A: Agent>(agents: Vec<A>) -> Result<Vec<A>, InstanceError> {
    let n = agents.len();
    let mut slots: Vec<Option<A>> = (0..n).map(|_| None).collect();

    for agent in agents {
        let id = agent.id();
        let slot = slots.get_mut(id).ok_or(InstanceError::IdOutOfRange {
            side: A::SIDE,
            id,
            len: n,
        })?;
        if slot.is_some() {
            return Err(InstanceError::DuplicateId { side: A::SIDE, id });
        }
        validate_ranking(&agent, n)?;
        *slot = Some(agent);
    }

    // n agents with distinct in-range ids fill every slot
    Ok(slots.into_iter().flatten().collect())
}

/// Check that a ranking is a permutation of `0..n`.
fn validate_ranking<A: Agent>(agent: &A, n: usize) -> Result<(), InstanceError> {
    let ranking = agent.ranking();
    if ranking.len() != n {
        return Err(InstanceError::RankingLength {
            side: A::SIDE,
            id: agent.id(),
            expected: n,
            actual: ranking.len(),
        });
    }

    let mut seen = vec![false; n];
    for &candidate in ranking {
        match seen.get_mut(candidate) {
            None => {
                return Err(InstanceError::UnknownCandidate {
                    side: A::SIDE,
                    id: agent.id(),
                    candidate,
                })
            }
            Some(true) => {
                return Err(InstanceError::RepeatedCandidate {
                    side: A::SIDE,
                    id: agent.id(),
                    candidate,
                })
            }
            Some(flag) => *flag = true,
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
