//! Agent records for the two sides of a matching instance.
//!
//! ## Rankings
//!
//! Every agent carries a strict total ranking over the opposite side:
//! index 0 is the most preferred candidate. Records are immutable once
//! built; all per-run mutation lives in the engine's run state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Proposer identifier, dense in `0..n`
pub type ProposerId = usize;

/// Responder identifier, dense in `0..n`
pub type ResponderId = usize;

// ============================================================================
// Side enum
// ============================================================================

/// Which set an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Actively offers itself in ranked order
    #[default]
    Proposer,
    /// Holds the best offer seen so far
    Responder,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Proposer => f.write_str("proposer"),
            Side::Responder => f.write_str("responder"),
        }
    }
}

// ============================================================================
// Agent trait
// ============================================================================

/// Common view over proposers and responders.
///
/// Lets validation and table building treat both sides uniformly.
pub trait Agent {
    /// The side this agent type belongs to
    const SIDE: Side;

    /// Agent identifier
    fn id(&self) -> usize;

    /// Candidate ids on the opposite side, most preferred first
    fn ranking(&self) -> &[usize];
}

impl Agent for Proposer {
    const SIDE: Side = Side::Proposer;

    fn id(&self) -> usize {
        self.id
    }

    fn ranking(&self) -> &[usize] {
        &self.ranking
    }
}

impl Agent for Responder {
    const SIDE: Side = Side::Responder;

    fn id(&self) -> usize {
        self.id
    }

    fn ranking(&self) -> &[usize] {
        &self.ranking
    }
}

// ============================================================================
// Proposer
// ============================================================================

/// A proposer and its ranking over responders.
///
/// ## Example
///
/// ```
/// use stable_match::types::Proposer;
///
/// let proposer = Proposer::new(0, vec![2, 0, 1]);
/// assert_eq!(proposer.ranking[0], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Proposer {
    /// Unique proposer identifier
    pub id: ProposerId,

    /// Responder ids, most preferred first
    pub ranking: Vec<ResponderId>,
}

impl Proposer {
    /// Create a proposer with an explicit id
    pub fn new(id: ProposerId, ranking: Vec<ResponderId>) -> Self {
        Self { id, ranking }
    }

    /// Build proposers from rankings, assigning `id = index`
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::types::Proposer;
    ///
    /// let proposers = Proposer::from_rankings(vec![vec![0, 1], vec![1, 0]]);
    /// assert_eq!(proposers[1].id, 1);
    /// ```
    pub fn from_rankings(rankings: Vec<Vec<ResponderId>>) -> Vec<Self> {
        rankings
            .into_iter()
            .enumerate()
            .map(|(id, ranking)| Self::new(id, ranking))
            .collect()
    }
}

// ============================================================================
// Responder
// ============================================================================

/// A responder and its ranking over proposers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Responder {
    /// Unique responder identifier
    pub id: ResponderId,

    /// Proposer ids, most preferred first
    pub ranking: Vec<ProposerId>,
}

impl Responder {
    /// Create a responder with an explicit id
    pub fn new(id: ResponderId, ranking: Vec<ProposerId>) -> Self {
        Self { id, ranking }
    }

    /// Build responders from rankings, assigning `id = index`
    pub fn from_rankings(rankings: Vec<Vec<ProposerId>>) -> Vec<Self> {
        rankings
            .into_iter()
            .enumerate()
            .map(|(id, ranking)| Self::new(id, ranking))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
