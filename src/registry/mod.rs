//! Agent registry for the matcher.
//!
//! ## Components
//!
//! - [`AgentRegistry`]: validated proposers and responders, stored by id
//! - [`RankTable`]: inverse rankings (candidate id -> rank position)
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build + validate | O(n^2) |
//! | Preference comparison | O(1) |
//! | Next candidate for a proposer | O(1) |
//!
//! Comparisons never search a ranking: the inverse tables are built once
//! per instance, which keeps a whole run at O(n^2).

pub mod agents;
pub mod rank;

pub use agents::AgentRegistry;
pub use rank::RankTable;
