//! Proposer-initiated deferred acceptance (Gale-Shapley).
//!
//! ## Algorithm
//!
//! 1. Every proposer starts on the work list at cursor 0; every responder
//!    is free.
//! 2. Take a proposer `m` from the work list and propose to the responder
//!    `w` at its cursor.
//! 3. `w` resolves the proposal against its hold:
//!    - free: hold `m`
//!    - prefers `m`: hold `m`, reject the incumbent
//!    - prefers the incumbent: reject `m`
//! 4. A rejected proposer advances its cursor and rejoins the work list.
//! 5. Stop when the work list is empty and read out the holds.
//!
//! Each proposal either creates a hold or advances a cursor, so a run
//! makes at most `n^2` proposals. The result is stable and
//! proposer-optimal regardless of the work-list order.

use tracing::{debug, trace, warn};

use crate::engine::{MatcherConfig, RunState};
use crate::error::MatchError;
use crate::registry::AgentRegistry;
use crate::types::{MatchReceipt, Matching, ProposalEvent, Proposer, Responder};

/// Result of a completed matching run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The stable matching
    pub matching: Matching,

    /// Number of proposals made
    pub proposals: u64,

    /// Number of rejections, including displaced holds
    pub rejections: u64,

    /// Every proposal in order (empty unless event recording is enabled)
    pub events: Vec<ProposalEvent>,
}

impl MatchOutcome {
    /// Summarize the run as a receipt
    pub fn receipt(&self) -> MatchReceipt {
        MatchReceipt::new(
            self.matching.len() as u64,
            self.proposals,
            self.rejections,
            self.matching.root(),
        )
    }
}

/// The deferred-acceptance matcher.
///
/// Stateless between runs; all mutable state lives in a [`RunState`]
/// created per call to [`Matcher::run`].
///
/// ## Example
///
/// ```
/// use stable_match::engine::Matcher;
/// use stable_match::registry::AgentRegistry;
///
/// let registry = AgentRegistry::from_rankings(
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![1, 0], vec![1, 0]],
/// ).unwrap();
///
/// let outcome = Matcher::new().run(&registry).unwrap();
///
/// // Both proposers want responder 0, who prefers proposer 1
/// assert_eq!(outcome.matching.partners(), &[1, 0]);
/// assert_eq!(outcome.proposals, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Create a matcher with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with an explicit configuration
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Run deferred acceptance over a validated instance
    ///
    /// # Errors
    ///
    /// [`MatchError::ExhaustedPreferences`] if a proposer runs out of
    /// candidates while unmatched. A validated square instance never does.
    pub fn run(&self, registry: &AgentRegistry) -> Result<MatchOutcome, MatchError> {
        let n = registry.len();
        let mut state = RunState::new(n, self.config.order);
        let mut events = Vec::new();
        let mut proposals: u64 = 0;
        let mut rejections: u64 = 0;
        // Validated registries and proposer_choice keep every id in 0..n
        let responder_ranks = registry.responder_ranks();

        debug!(agents = n, order = ?self.config.order, "starting deferred acceptance");

        while let Some(m) = state.next_active() {
            let cursor = state.cursor(m);
            let Some(w) = registry.proposer_choice(m, cursor) else {
                warn!(proposer = m, cursor, "proposer exhausted its ranking");
                return Err(MatchError::ExhaustedPreferences { proposer: m });
            };

            let outcome = state.offer(w, m, |incumbent| responder_ranks.prefers(w, m, incumbent));
            trace!(
                proposal = proposals,
                proposer = m,
                responder = w,
                cursor,
                ?outcome,
                holder = ?state.held_by(w),
                pending = state.active_len(),
                "proposal resolved"
            );

            if self.config.record_events {
                events.push(ProposalEvent::new(proposals, m, w, cursor, outcome));
            }
            proposals += 1;

            if let Some(rejected) = outcome.rejected(m) {
                rejections += 1;
                let next = state.advance(rejected);
                if registry.proposer_choice(rejected, next).is_none() {
                    warn!(proposer = rejected, cursor = next, "proposer exhausted its ranking");
                    return Err(MatchError::ExhaustedPreferences { proposer: rejected });
                }
                state.activate(rejected);
            }
        }

        let matching = state.into_matching()?;

        debug!(
            agents = n,
            proposals,
            rejections,
            root = %matching.root_hex(),
            "deferred acceptance complete"
        );

        Ok(MatchOutcome {
            matching,
            proposals,
            rejections,
            events,
        })
    }
}

/// Compute the proposer-optimal stable matching for an instance.
///
/// Validates the instance, runs the matcher with the default
/// configuration, and returns the matching.
///
/// # Errors
///
/// - [`MatchError::InvalidInstance`] if the input is not a square instance
///   with strict total rankings
/// - [`MatchError::ExhaustedPreferences`] if a proposer is left unmatched
///
/// ## Example
///
/// ```
/// use stable_match::stable_match;
/// use stable_match::types::{Proposer, Responder};
///
/// let prefs = vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 0, 2]];
/// let matching = stable_match(
///     Proposer::from_rankings(prefs.clone()),
///     Responder::from_rankings(prefs),
/// ).unwrap();
///
/// assert_eq!(matching.partners(), &[0, 2, 1]);
/// ```
pub fn stable_match(
    proposers: Vec<Proposer>,
    responders: Vec<Responder>,
) -> Result<Matching, MatchError> {
    let registry = AgentRegistry::new(proposers, responders)?;
    Matcher::new().run(&registry).map(|outcome| outcome.matching)
}

// ============================================================================
// Unit Tests
// ============================================================================
