//! Matching engine: deferred acceptance over a validated instance.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same instance always produces the same matching
//! 2. **O(1) comparisons**: Preferences are read from inverse-rank tables
//! 3. **Synchronous Execution**: No I/O, no async, no shared state
//! 4. **Monotonic state**: Cursors never rewind, responders never trade down
//!
//! ## Matching Rules
//!
//! - **Proposers** propose down their rankings, one candidate at a time
//! - **Responders** hold the best proposal seen so far and reject the rest
//! - **Rejected** proposers move to their next candidate
//! - **Holds** become final when no proposer is left to propose
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::{is_stable, Matcher};
//! use stable_match::registry::AgentRegistry;
//!
//! let prefs = vec![vec![0, 1, 2, 3], vec![2, 3, 0, 1], vec![1, 0, 3, 2], vec![3, 2, 1, 0]];
//! let registry = AgentRegistry::from_rankings(prefs.clone(), prefs).unwrap();
//!
//! let outcome = Matcher::new().run(&registry).unwrap();
//!
//! assert_eq!(outcome.matching.partners(), &[0, 2, 1, 3]);
//! assert!(is_stable(&registry, &outcome.matching));
//! ```
//!
//! Per-run state stays inside the crate; proposals are only resolved
//! through [`Matcher::run`]:
//!
//! ```compile_fail
//! use stable_match::engine::RunState;
//! ```

pub mod config;
pub mod matcher;
pub(crate) mod state;
pub mod verify;

pub use config::{MatcherConfig, ProposalOrder};
pub use matcher::{stable_match, MatchOutcome, Matcher};
pub(crate) use state::RunState;
pub use verify::{blocking_pairs, is_stable};
