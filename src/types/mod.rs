//! Core data types for stable matching
//!
//! ## Types
//!
//! - [`Proposer`] / [`Responder`]: immutable agents with strict rankings
//! - [`Side`]: which set an agent belongs to
//! - [`Matching`]: the proposer-to-responder result
//! - [`ProposalEvent`]: one resolved proposal
//! - [`MatchReceipt`]: SSZ-encoded run summary
//!
//! ## Identifiers
//!
//! Agent ids are dense `usize` values in `0..n`, so every per-agent table
//! in the crate is a plain array indexed by id.

mod agent;
mod event;
mod matching;
mod receipt;

// Re-export all types at module level
pub use agent::{Agent, Proposer, ProposerId, Responder, ResponderId, Side};
pub use event::{ProposalEvent, ProposalOutcome};
pub use matching::Matching;
pub use receipt::MatchReceipt;
