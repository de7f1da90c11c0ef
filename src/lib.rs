//! # Stable Match
//!
//! Proposer-optimal stable matching between two equal-size sets of agents
//! using deferred acceptance (Gale-Shapley).
//!
//! ## Architecture
//!
//! The matcher consists of:
//! - **Types**: Core data structures (Proposer, Responder, Matching, MatchReceipt)
//! - **Registry**: Validated instance with inverse-rank lookup tables
//! - **Engine**: Deterministic deferred-acceptance matcher and stability checks
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All runs produce identical results for identical inputs
//! 2. **Eager Validation**: Malformed instances never reach the matcher
//! 3. **Flat State**: Cursors and holds are plain arrays indexed by id
//! 4. **Synchronous Execution**: No async, no I/O, no shared state
//!
//! ## Complexity
//!
//! - Setup: O(n^2) to validate and build rank tables
//! - Run: at most n^2 proposals, O(1) each
//!
//! ## Example
//!
//! ```
//! use stable_match::{stable_match, Proposer, Responder};
//!
//! let men = vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 0, 2]];
//! let women = vec![vec![0, 1, 2], vec![2, 0, 1], vec![1, 0, 2]];
//!
//! let matching = stable_match(
//!     Proposer::from_rankings(men),
//!     Responder::from_rankings(women),
//! ).unwrap();
//!
//! assert_eq!(matching.partner_of(1), Some(2));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Proposer, Responder, Matching, MatchReceipt
pub mod types;

/// Agent registry: validation and inverse-rank tables
pub mod registry;

/// Matching engine: deferred acceptance and stability checks
pub mod engine;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{blocking_pairs, is_stable, stable_match, MatchOutcome, Matcher, MatcherConfig, ProposalOrder};
pub use error::{InstanceError, MatchError};
pub use registry::AgentRegistry;
pub use types::{MatchReceipt, Matching, ProposalEvent, ProposalOutcome, Proposer, Responder, Side};
