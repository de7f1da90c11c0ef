//! Inverse-rank lookup tables.
//!
//! ## Design
//!
//! A ranking answers "who is at position k?". Comparing two candidates
//! needs the opposite question, "at which position is candidate c?".
//! `RankTable` stores that inverse for every agent on one side in a single
//! flat array:
//!
//! ```text
//! rank[agent * n + candidate] = position of candidate in agent's ranking
//! ```
//!
//! Built once per instance; every comparison afterwards is O(1).

/// Inverse rankings for all agents on one side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankTable {
    /// Number of candidates per agent
    n: usize,

    /// Row-major positions, `n * n` entries
    positions: Vec<usize>,
}

impl RankTable {
    /// Build a table from already-validated rankings.
    ///
    /// Each ranking must be a permutation of `0..rankings.len()`.
    pub fn from_rankings<'a, I>(rankings: I, n: usize) -> Self
    where
        I: IntoIterator<Item = &'a [usize]>,
    {
        let mut positions = vec![0; n * n];
        for (agent, ranking) in rankings.into_iter().enumerate() {
            let row = &mut positions[agent * n..(agent + 1) * n];
            for (position, &candidate) in ranking.iter().enumerate() {
                row[candidate] = position;
            }
        }
        Self { n, positions }
    }

    /// Number of agents (and candidates) covered
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the table is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Position of `candidate` in `agent`'s ranking (0 = most preferred).
    ///
    /// Returns `None` if either id is outside `0..len()`.
    #[inline]
    pub fn get(&self, agent: usize, candidate: usize) -> Option<usize> {
        (agent < self.n && candidate < self.n).then(|| self.position(agent, candidate))
    }

    /// Does `agent` strictly prefer `candidate` over `incumbent`?
    ///
    /// Returns `None` if any id is outside `0..len()`.
    #[inline]
    pub fn compare(&self, agent: usize, candidate: usize, incumbent: usize) -> Option<bool> {
        Some(self.get(agent, candidate)? < self.get(agent, incumbent)?)
    }

    /// Unchecked lookup for ids already known to be in range
    #[inline]
    pub(crate) fn position(&self, agent: usize, candidate: usize) -> usize {
        debug_assert!(agent < self.n && candidate < self.n);
        self.positions[agent * self.n + candidate]
    }

    /// Unchecked comparison, see [`RankTable::position`]
    #[inline]
    pub(crate) fn prefers(&self, agent: usize, candidate: usize, incumbent: usize) -> bool {
        self.position(agent, candidate) < self.position(agent, incumbent)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
