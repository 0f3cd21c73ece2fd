// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Property-based tests for the sampling building blocks.
//!
//! Uses proptest to verify invariants across randomly generated inputs.

use percolate_algo::algo::algorithms::{DiameterApprox, DiameterConfig};
use percolate_algo::algo::{BfsDistances, Direction, SortedPercolationOrder};
use percolate_algo::{
    DenominatorKind, DenominatorTable, GraphProjection, GraphView, PathSampler,
    PercolationStates, PredecessorChoice, ProjectionBuilder, SampleSize, Vid,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// -----------------------------------------------------------------------------
// Strategies
// -----------------------------------------------------------------------------

fn states_strategy() -> impl Strategy<Value = Vec<f64>> {
    // Coarse grid so ties show up often
    prop::collection::vec((0u32..=20).prop_map(|k| k as f64 / 20.0), 1..=50)
}

/// Connected undirected graph: a random tree over `0..n` plus extra edges.
fn connected_graph_strategy() -> impl Strategy<Value = GraphProjection> {
    (2u64..30)
        .prop_flat_map(|n| {
            let parents = (1..n).map(|v| 0..v).collect::<Vec<_>>();
            let extra = prop::collection::vec((0..n, 0..n), 0..(2 * n as usize));
            (Just(n), parents, extra)
        })
        .prop_map(|(n, parents, extra)| {
            let tree = parents
                .into_iter()
                .enumerate()
                .map(|(i, p)| (Vid::from(p), Vid::from(i as u64 + 1)));
            ProjectionBuilder::new()
                .vertices((0..n).map(Vid::from))
                .edges(tree)
                .edges(extra.into_iter().map(|(a, b)| (Vid::from(a), Vid::from(b))))
                .build()
        })
}

fn aligned(values: &[f64]) -> PercolationStates {
    let graph = ProjectionBuilder::new()
        .vertices((0..values.len() as u64).map(Vid::from))
        .build();
    PercolationStates::from_slots(&graph, values.to_vec()).unwrap()
}

fn diameter_of(graph: &GraphProjection) -> u32 {
    let mut bfs = BfsDistances::new(graph.vertex_count());
    (0..graph.vertex_count() as u32)
        .map(|s| {
            bfs.run(graph, s, Direction::Outgoing);
            bfs.reached()
                .iter()
                .filter_map(|&t| bfs.distance(t))
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0)
}

// -----------------------------------------------------------------------------
// Denominators
// -----------------------------------------------------------------------------

proptest! {
    /// The sorted-prefix construction must agree with the quadratic definition.
    #[test]
    fn vertex_gap_matches_definition(values in states_strategy()) {
        let states = aligned(&values);
        let table = DenominatorTable::build_with(
            &SortedPercolationOrder::new(&states),
            DenominatorKind::VertexGap,
        );
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        for (v, &xv) in values.iter().enumerate() {
            let brute: f64 = values.iter().map(|&xu| (xu - xv).max(0.0)).sum();
            let got = table.get(v as u32);
            prop_assert!(got >= 0.0);
            prop_assert!((got - brute).abs() < 1e-9, "{} vs {}", got, brute);
            if xv == max {
                prop_assert_eq!(got, 0.0);
            }
        }
    }

    #[test]
    fn pairs_excluding_matches_definition(values in states_strategy()) {
        let states = aligned(&values);
        let table = DenominatorTable::build_with(
            &SortedPercolationOrder::new(&states),
            DenominatorKind::PairsExcludingVertex,
        );

        for v in 0..values.len() {
            let mut brute = 0.0;
            for s in (0..values.len()).filter(|&s| s != v) {
                for t in (0..values.len()).filter(|&t| t != v) {
                    brute += (values[s] - values[t]).max(0.0);
                }
            }
            let got = table.get(v as u32);
            prop_assert!(got >= 0.0);
            prop_assert!((got - brute).abs() < 1e-7, "{} vs {}", got, brute);
        }
    }
}

// -----------------------------------------------------------------------------
// Diameter and sample size
// -----------------------------------------------------------------------------

proptest! {
    /// Double sweep lies in [ceil(D / 2), 2D] on connected graphs.
    #[test]
    fn diameter_estimate_within_bounds(
        graph in connected_graph_strategy(),
        seed in any::<u64>(),
    ) {
        let truth = diameter_of(&graph);
        let config = DiameterConfig {
            directed: false,
            seed: Some(seed),
        };
        let estimate = DiameterApprox::run(&graph, config);
        prop_assert_eq!(estimate.component_count, 1);
        prop_assert!(estimate.value >= truth.div_ceil(2));
        prop_assert!(estimate.value <= 2 * truth);
    }

    #[test]
    fn sample_size_is_positive_and_monotonic(
        epsilon in 0.01f64..1.0,
        delta in 0.01f64..0.99,
        diameter in 1u32..10_000,
    ) {
        let r = SampleSize::compute(epsilon, delta, diameter, 0.5).unwrap();
        prop_assert!(r >= 1);
        let tighter = SampleSize::compute(epsilon / 2.0, delta, diameter, 0.5).unwrap();
        prop_assert!(tighter >= r);
        let wider = SampleSize::compute(epsilon, delta, diameter.saturating_mul(2), 0.5).unwrap();
        prop_assert!(wider >= r);
    }
}

// -----------------------------------------------------------------------------
// Path sampling
// -----------------------------------------------------------------------------

proptest! {
    /// Every sampled path is a shortest path from u to w, listed from w back to u.
    #[test]
    fn sampled_paths_are_shortest(
        graph in connected_graph_strategy(),
        seed in any::<u64>(),
        weighted in any::<bool>(),
    ) {
        let choice = if weighted {
            PredecessorChoice::PathWeighted
        } else {
            PredecessorChoice::Distinct
        };
        let mut sampler = PathSampler::new(&graph, choice);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut bfs = BfsDistances::new(graph.vertex_count());
        let n = graph.vertex_count() as u32;

        for u in 0..n.min(5) {
            bfs.run(&graph, u, Direction::Outgoing);
            for w in 0..n {
                let path = sampler.sample(u, w, &mut rng).unwrap();
                prop_assert_eq!(path.len() as u32, bfs.distance(w).unwrap() + 1);
                prop_assert_eq!(path[0], w);
                prop_assert_eq!(*path.last().unwrap(), u);
                for pair in path.windows(2) {
                    prop_assert!(graph.out_neighbors(pair[1]).contains(&pair[0]));
                }
            }
        }
    }
}
