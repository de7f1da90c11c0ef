//! Configuration for the matcher.

use serde::Deserialize;

/// Order in which active proposers are taken from the work list.
///
/// Every order yields the same matching; only the proposal sequence
/// (and therefore the event log) differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalOrder {
    /// First in, first out: rejected proposers rejoin at the back
    #[default]
    Queue,
    /// Last in, first out: a rejected proposer proposes again immediately
    Stack,
}

/// Matcher configuration.
///
/// ## Example
///
/// ```
/// use stable_match::engine::{MatcherConfig, ProposalOrder};
///
/// let config = MatcherConfig::default()
///     .with_order(ProposalOrder::Stack)
///     .with_events(true);
///
/// assert!(config.record_events);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Processing order of the active work list
    pub order: ProposalOrder,

    /// Keep a [`crate::types::ProposalEvent`] for every proposal
    pub record_events: bool,
}

impl MatcherConfig {
    /// Set the processing order
    pub fn with_order(mut self, order: ProposalOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable or disable the event log
    pub fn with_events(mut self, record_events: bool) -> Self {
        self.record_events = record_events;
        self
    }
}
