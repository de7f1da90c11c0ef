//! Mutable state of a single matching run.
//!
//! ## Layout
//!
//! ```text
//! cursors[m]  next position to try in proposer m's ranking
//! held[w]     proposer currently held by responder w (None = free)
//! active      work list of proposers that are free with candidates left
//! ```
//!
//! Agent records stay immutable in the registry; only these arrays change.
//! Cursors only move forward, and `held[w]` only changes to a proposer
//! that `w` ranks higher.

use std::collections::VecDeque;

use crate::engine::ProposalOrder;
use crate::error::MatchError;
use crate::types::{Matching, ProposalOutcome, ProposerId, ResponderId};

/// Proposal cursors, engagement table, and the active work list.
#[derive(Debug, Clone)]
pub(crate) struct RunState {
    /// Proposal cursor per proposer
    cursors: Vec<usize>,

    /// Engagement table: current hold per responder
    held: Vec<Option<ProposerId>>,

    /// Proposers waiting to propose
    active: VecDeque<ProposerId>,

    /// Which end of `active` is taken next
    order: ProposalOrder,
}

impl RunState {
    /// Fresh state: every proposer active at cursor 0, every responder free
    pub(crate) fn new(n: usize, order: ProposalOrder) -> Self {
        Self {
            cursors: vec![0; n],
            held: vec![None; n],
            active: (0..n).collect(),
            order,
        }
    }

    // ========================================================================
    // Work List
    // ========================================================================

    /// Take the next proposer to act
    #[inline]
    pub(crate) fn next_active(&mut self) -> Option<ProposerId> {
        match self.order {
            ProposalOrder::Queue => self.active.pop_front(),
            ProposalOrder::Stack => self.active.pop_back(),
        }
    }

    /// Return a proposer to the work list
    #[inline]
    pub(crate) fn activate(&mut self, m: ProposerId) {
        self.active.push_back(m);
    }

    /// Number of proposers waiting to propose
    #[inline]
    pub(crate) fn active_len(&self) -> usize {
        self.active.len()
    }

    // ========================================================================
    // Proposal Cursor
    // ========================================================================

    /// Current cursor of proposer `m`
    #[inline]
    pub(crate) fn cursor(&self, m: ProposerId) -> usize {
        self.cursors[m]
    }

    /// Move proposer `m` past its current candidate; returns the new cursor
    #[inline]
    pub(crate) fn advance(&mut self, m: ProposerId) -> usize {
        let cursor = &mut self.cursors[m];
        *cursor += 1;
        *cursor
    }

    // ========================================================================
    // Engagement Table
    // ========================================================================

    /// Proposer currently held by responder `w`
    #[inline]
    pub(crate) fn held_by(&self, w: ResponderId) -> Option<ProposerId> {
        self.held[w]
    }

    /// Resolve a proposal from `m` to `w` as one compare-and-update.
    ///
    /// `prefers(incumbent)` must answer whether `w` ranks `m` above
    /// `incumbent`. The hold only ever moves to a better proposer.
    pub(crate) fn offer<F>(&mut self, w: ResponderId, m: ProposerId, prefers: F) -> ProposalOutcome
    where
        F: FnOnce(ProposerId) -> bool,
    {
        let slot = &mut self.held[w];
        match *slot {
            None => {
                *slot = Some(m);
                ProposalOutcome::Accepted
            }
            Some(incumbent) => {
                if prefers(incumbent) {
                    *slot = Some(m);
                    ProposalOutcome::Displaced { previous: incumbent }
                } else {
                    ProposalOutcome::Rejected
                }
            }
        }
    }

    /// Read the engagement table out as a proposer-to-responder matching.
    ///
    /// # Errors
    ///
    /// [`MatchError::ExhaustedPreferences`] naming the lowest unmatched
    /// proposer if any proposer (equivalently, any responder) is not held.
    pub(crate) fn into_matching(self) -> Result<Matching, MatchError> {
        let mut partners = vec![None; self.held.len()];
        for (w, holder) in self.held.into_iter().enumerate() {
            if let Some(m) = holder {
                partners[m] = Some(w);
            }
        }

        partners
            .into_iter()
            .enumerate()
            .map(|(m, w)| w.ok_or(MatchError::ExhaustedPreferences { proposer: m }))
            .collect::<Result<Vec<_>, _>>()
            .map(Matching::from_partners)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
