//! Property tests over seeded random instances.
//!
//! Each property is checked on a batch of instances generated with
//! `ChaCha8Rng`, so failures are reproducible from the seed in the message.

mod common;

use stable_match::engine::blocking_pairs;
use stable_match::{AgentRegistry, MatchOutcome, Matcher, MatcherConfig, ProposalOrder};

/// Instance sizes exercised by the randomized properties
const SIZES: [usize; 6] = [1, 2, 3, 5, 8, 20];

/// Seeds per size
const SEEDS: u64 = 25;

fn run(registry: &AgentRegistry, order: ProposalOrder) -> MatchOutcome {
    let config = MatcherConfig::default().with_order(order).with_events(true);
    Matcher::with_config(config)
        .run(registry)
        .expect("valid instance always matches")
}

fn for_each_instance(mut check: impl FnMut(&AgentRegistry, usize, u64)) {
    for &n in &SIZES {
        for seed in 0..SEEDS {
            let registry = common::random_instance(n, seed);
            check(&registry, n, seed);
        }
    }
}

#[test]
fn result_is_a_bijection() {
    for_each_instance(|registry, n, seed| {
        let outcome = run(registry, ProposalOrder::Queue);

        assert_eq!(outcome.matching.len(), n, "n={} seed={}", n, seed);
        assert!(outcome.matching.is_bijective(), "n={} seed={}", n, seed);
    });
}

#[test]
fn result_has_no_blocking_pair() {
    for_each_instance(|registry, n, seed| {
        let outcome = run(registry, ProposalOrder::Queue);

        assert_eq!(
            blocking_pairs(registry, &outcome.matching),
            Some(vec![]),
            "n={} seed={}",
            n,
            seed
        );
    });
}

#[test]
fn proposals_bounded_by_n_squared() {
    for_each_instance(|registry, n, seed| {
        for order in [ProposalOrder::Queue, ProposalOrder::Stack] {
            let outcome = run(registry, order);

            assert!(
                outcome.proposals <= (n * n) as u64,
                "n={} seed={} proposals={}",
                n,
                seed,
                outcome.proposals
            );
            assert_eq!(outcome.events.len() as u64, outcome.proposals);
            assert_eq!(outcome.proposals - outcome.rejections, n as u64);
        }
    });
}

#[test]
fn identical_rankings_hit_the_worst_case() {
    // Proposer k is rejected by every responder ranked above it
    for n in [1, 4, 16, 50] {
        let outcome = run(&common::identical_instance(n), ProposalOrder::Queue);

        assert_eq!(outcome.proposals, (n * (n + 1) / 2) as u64);
        assert_eq!(outcome.matching.partners(), (0..n).collect::<Vec<_>>().as_slice());
    }
}

#[test]
fn cursors_and_holds_are_monotonic() {
    for_each_instance(|registry, n, seed| {
        for order in [ProposalOrder::Queue, ProposalOrder::Stack] {
            let outcome = run(registry, order);
            let mut last_cursor: Vec<Option<usize>> = vec![None; n];
            let mut held_rank: Vec<Option<usize>> = vec![None; n];

            for event in &outcome.events {
                // A proposer never revisits an earlier candidate
                if let Some(previous) = last_cursor[event.proposer] {
                    assert!(event.cursor > previous, "n={} seed={} {:?}", n, seed, event);
                }
                last_cursor[event.proposer] = Some(event.cursor);

                let rank = registry
                    .responder_rank(event.responder, event.proposer)
                    .expect("event ids are in range");
                match event.holder_after() {
                    // A responder only ever trades up
                    Some(_) => {
                        if let Some(current) = held_rank[event.responder] {
                            assert!(rank < current, "n={} seed={} {:?}", n, seed, event);
                        }
                        held_rank[event.responder] = Some(rank);
                    }
                    // A rejection means the incumbent ranks higher
                    None => {
                        let current = held_rank[event.responder].expect("rejection needs a hold");
                        assert!(rank > current, "n={} seed={} {:?}", n, seed, event);
                    }
                }
            }
        }
    });
}

#[test]
fn processing_order_does_not_change_the_result() {
    for_each_instance(|registry, n, seed| {
        let queue = run(registry, ProposalOrder::Queue);
        let stack = run(registry, ProposalOrder::Stack);

        assert_eq!(queue.matching, stack.matching, "n={} seed={}", n, seed);
        assert_eq!(queue.receipt().matching_root, stack.receipt().matching_root);
    });
}

#[test]
fn reruns_are_deterministic() {
    let registry = common::random_instance(200, 12345);

    let first = run(&registry, ProposalOrder::Queue);
    let second = run(&registry, ProposalOrder::Queue);

    assert_eq!(first, second);
    assert_eq!(first.receipt().matching_root_hex(), second.receipt().matching_root_hex());

    let other = run(&common::random_instance(200, 12346), ProposalOrder::Queue);
    assert_ne!(first.matching.root(), other.matching.root());
}

#[test]
fn result_is_proposer_optimal() {
    for n in 1..=6 {
        for seed in 0..SEEDS {
            let registry = common::random_instance(n, seed);
            let outcome = run(&registry, ProposalOrder::Queue);
            let stable = common::all_stable_matchings(&registry);

            assert!(stable.contains(&outcome.matching), "n={} seed={}", n, seed);
            for other in &stable {
                for (m, w) in outcome.matching.pairs() {
                    let alternative = other.partner_of(m).expect("perfect matching");
                    let rank = registry.proposer_rank(m, w).expect("in range");
                    let alternative_rank = registry.proposer_rank(m, alternative).expect("in range");
                    assert!(
                        rank <= alternative_rank,
                        "n={} seed={} proposer {} could do better",
                        n,
                        seed,
                        m
                    );
                }
            }
        }
    }
}

#[test]
fn result_is_responder_pessimal() {
    for n in 1..=6 {
        for seed in 0..SEEDS {
            let registry = common::random_instance(n, seed);
            let outcome = run(&registry, ProposalOrder::Queue);
            let holders = outcome.matching.inverse().expect("bijection");

            for other in common::all_stable_matchings(&registry) {
                let other_holders = other.inverse().expect("bijection");
                for w in 0..n {
                    let rank = registry.responder_rank(w, holders[w]).expect("in range");
                    let other_rank = registry.responder_rank(w, other_holders[w]).expect("in range");
                    assert!(
                        rank >= other_rank,
                        "n={} seed={} responder {}",
                        n,
                        seed,
                        w
                    );
                }
            }
        }
    }
}
