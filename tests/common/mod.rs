//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::engine::is_stable;
use stable_match::{AgentRegistry, Matching};

/// The 4x4 instance used by several tests (same rankings on both sides).
pub fn four_by_four() -> Vec<Vec<usize>> {
    vec![vec![0, 1, 2, 3], vec![2, 3, 0, 1], vec![1, 0, 3, 2], vec![3, 2, 1, 0]]
}

/// Generate `n` uniformly random rankings of `0..n`.
///
/// Uses a seeded RNG for reproducibility. Same seed = same rankings.
pub fn random_rankings(n: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut ranking: Vec<usize> = (0..n).collect();
            ranking.shuffle(rng);
            ranking
        })
        .collect()
}

/// Generate a random square instance from a seed.
pub fn random_instance(n: usize, seed: u64) -> AgentRegistry {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = random_rankings(n, &mut rng);
    let responders = random_rankings(n, &mut rng);
    AgentRegistry::from_rankings(proposers, responders).expect("generated instance is valid")
}

/// Every agent ranks the other side in the same order: worst case for
/// the number of proposals.
pub fn identical_instance(n: usize) -> AgentRegistry {
    let ranking: Vec<usize> = (0..n).collect();
    AgentRegistry::from_rankings(vec![ranking.clone(); n], vec![ranking; n])
        .expect("identical instance is valid")
}

/// All permutations of `0..n` (Heap's algorithm).
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn heap(k: usize, items: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k - 1 {
            heap(k - 1, items, out);
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
        }
        heap(k - 1, items, out);
    }

    let mut items: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    heap(n, &mut items, &mut out);
    out
}

/// Brute force: every stable matching of a small instance.
pub fn all_stable_matchings(registry: &AgentRegistry) -> Vec<Matching> {
    permutations(registry.len())
        .into_iter()
        .map(Matching::from_partners)
        .filter(|matching| is_stable(registry, matching))
        .collect()
}
