//! Proposal events recorded during a matching run.
//!
//! Each event is one proposal and how the responder resolved it. The log
//! is optional (see [`crate::engine::MatcherConfig::record_events`]) and is
//! mainly useful for auditing monotonicity: cursors never rewind and
//! responders never trade down.

use crate::types::{ProposerId, ResponderId};

/// How a responder resolved a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalOutcome {
    /// Responder was free and now holds the proposer
    Accepted,
    /// Responder traded up; `previous` was released and rejected
    Displaced {
        /// The proposer that lost its hold
        previous: ProposerId,
    },
    /// Responder kept its current hold; the proposer was rejected
    Rejected,
}

impl ProposalOutcome {
    /// Returns true if the proposer now holds the responder
    pub fn is_held(self) -> bool {
        !matches!(self, ProposalOutcome::Rejected)
    }

    /// The proposer rejected by this resolution, if any
    pub fn rejected(self, proposer: ProposerId) -> Option<ProposerId> {
        match self {
            ProposalOutcome::Accepted => None,
            ProposalOutcome::Displaced { previous } => Some(previous),
            ProposalOutcome::Rejected => Some(proposer),
        }
    }
}

/// A single proposal from `proposer` to `responder`.
///
/// ## Example
///
/// ```
/// use stable_match::types::{ProposalEvent, ProposalOutcome};
///
/// let event = ProposalEvent::new(0, 3, 1, 0, ProposalOutcome::Displaced { previous: 2 });
/// assert_eq!(event.rejected_proposer(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProposalEvent {
    /// Position of this proposal in the run (0-based)
    pub sequence: u64,

    /// The proposing agent
    pub proposer: ProposerId,

    /// The responder proposed to
    pub responder: ResponderId,

    /// Proposer's cursor at the time of the proposal
    pub cursor: usize,

    /// Resolution of the proposal
    pub outcome: ProposalOutcome,
}

impl ProposalEvent {
    /// Create a new proposal event
    pub fn new(
        sequence: u64,
        proposer: ProposerId,
        responder: ResponderId,
        cursor: usize,
        outcome: ProposalOutcome,
    ) -> Self {
        Self {
            sequence,
            proposer,
            responder,
            cursor,
            outcome,
        }
    }

    /// The proposer this event rejected, if any
    pub fn rejected_proposer(&self) -> Option<ProposerId> {
        self.outcome.rejected(self.proposer)
    }

    /// The proposer holding `responder` after this event, if it changed hands
    pub fn holder_after(&self) -> Option<ProposerId> {
        self.outcome.is_held().then_some(self.proposer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
