//! Benchmarks for the deferred-acceptance matcher.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- random_instance
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_match::{AgentRegistry, Matcher, MatcherConfig, ProposalOrder};

// ============================================================================
// HELPER FUNCTIONS - Deterministic instance generation
// ============================================================================

/// Generate `n` random rankings of `0..n` from a seeded RNG
fn random_rankings(n: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<usize>> {
    (0..n)
        .map(|_| {
            let mut ranking: Vec<usize> = (0..n).collect();
            ranking.shuffle(rng);
            ranking
        })
        .collect()
}

/// Rankings for both sides of a random instance
fn random_instance(n: usize, seed: u64) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = random_rankings(n, &mut rng);
    let responders = random_rankings(n, &mut rng);
    (proposers, responders)
}

/// Every agent ranks the other side identically: n(n+1)/2 proposals
fn identical_instance(n: usize) -> AgentRegistry {
    let ranking: Vec<usize> = (0..n).collect();
    AgentRegistry::from_rankings(vec![ranking.clone(); n], vec![ranking; n]).unwrap()
}

const SIZES: [usize; 6] = [16, 32, 64, 128, 256, 512];

// ============================================================================
// BENCHMARK: Registry construction (validation + rank tables)
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_build");

    for &n in &SIZES {
        let (proposers, responders) = random_instance(n, 42);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                black_box(
                    AgentRegistry::from_rankings(proposers.clone(), responders.clone()).unwrap(),
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Matching random instances
// ============================================================================

fn bench_random_instance(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_instance");

    for &n in &SIZES {
        let (proposers, responders) = random_instance(n, 42);
        let registry = AgentRegistry::from_rankings(proposers, responders).unwrap();
        let matcher = Matcher::new();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &registry, |b, registry| {
            b.iter(|| black_box(matcher.run(registry).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Worst case (identical rankings)
// ============================================================================

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("identical_rankings");

    for &n in &SIZES {
        let registry = identical_instance(n);
        let matcher = Matcher::new();

        group.throughput(Throughput::Elements((n * (n + 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &registry, |b, registry| {
            b.iter(|| black_box(matcher.run(registry).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Processing order and event recording
// ============================================================================

fn bench_config(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher_config");

    let (proposers, responders) = random_instance(256, 7);
    let registry = AgentRegistry::from_rankings(proposers, responders).unwrap();

    let configs = [
        ("queue", MatcherConfig::default()),
        ("stack", MatcherConfig::default().with_order(ProposalOrder::Stack)),
        ("queue_events", MatcherConfig::default().with_events(true)),
    ];

    for (name, config) in configs {
        let matcher = Matcher::with_config(config);
        group.bench_function(name, |b| {
            b.iter(|| black_box(matcher.run(&registry).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_registry,
    bench_random_instance,
    bench_worst_case,
    bench_config
);
criterion_main!(benches);
