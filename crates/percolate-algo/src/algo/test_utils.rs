// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::algo::algorithms::DenominatorTable;
use crate::algo::traversal::{BfsDistances, ShortestPathDag};
use crate::algo::view::{Direction, GraphView};
use crate::algo::{GraphProjection, PercolationStates, ProjectionBuilder};
use percolate_common::PredecessorChoice;
use percolate_common::core::id::Vid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Graph over vertices `0..n`. Ids are dense, so slot `i` is vertex `i`.
pub fn build_test_graph(n: u64, edges: &[(u64, u64)], directed: bool) -> GraphProjection {
    ProjectionBuilder::new()
        .directed(directed)
        .vertices((0..n).map(Vid::from))
        .edges(edges.iter().map(|&(s, d)| (Vid::from(s), Vid::from(d))))
        .build()
}

pub fn slot(graph: &GraphProjection, id: u64) -> u32 {
    graph
        .to_slot(Vid::from(id))
        .expect("vertex not in test graph")
}

/// `0 - 1 - ... - (n - 1)`
pub fn path_graph(n: u64, directed: bool) -> GraphProjection {
    let edges: Vec<(u64, u64)> = (1..n).map(|i| (i - 1, i)).collect();
    build_test_graph(n, &edges, directed)
}

/// Random undirected graph: a random spanning tree plus every other pair with
/// probability `p`.
pub fn connected_random_graph(n: u64, p: f64, seed: u64) -> GraphProjection {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for v in 1..n {
        edges.push((rng.gen_range(0..v), v));
    }
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                edges.push((a, b));
            }
        }
    }
    build_test_graph(n, &edges, false)
}

/// Uniform `[0, 1)` state per vertex.
pub fn random_states(graph: &GraphProjection, seed: u64) -> PercolationStates {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..graph.vertex_count())
        .map(|_| rng.gen_range(0.0..1.0))
        .collect();
    PercolationStates::from_slots(graph, values).expect("valid states")
}

/// Exact diameter in hops of a connected undirected graph.
pub fn true_diameter(graph: &GraphProjection) -> u32 {
    let mut bfs = BfsDistances::new(graph.vertex_count());
    let mut diameter = 0;
    for source in 0..graph.vertex_count() as u32 {
        bfs.run(graph, source, Direction::Outgoing);
        for &t in bfs.reached() {
            diameter = diameter.max(bfs.distance(t).unwrap_or(0));
        }
    }
    diameter
}

/// `D(v) = Σ_u max(x(u) - x(v), 0)`, quadratic.
pub fn brute_force_vertex_gaps(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .map(|&xv| values.iter().map(|&xu| (xu - xv).max(0.0)).sum())
        .collect()
}

/// `D(v) = Σ_{s,t ≠ v} max(x(s) - x(t), 0)`, cubic.
pub fn brute_force_pair_denominators(values: &[f64]) -> Vec<f64> {
    (0..values.len())
        .map(|v| {
            let mut sum = 0.0;
            for s in 0..values.len() {
                for t in 0..values.len() {
                    if s != v && t != v {
                        sum += (values[s] - values[t]).max(0.0);
                    }
                }
            }
            sum
        })
        .collect()
}

/// Expected per-vertex estimate of the sampler, computed exactly by pushing
/// walk probabilities down the shortest-path DAG of every ordered pair.
pub fn expected_walk_scores(
    graph: &GraphProjection,
    states: &PercolationStates,
    denominators: &DenominatorTable,
    choice: PredecessorChoice,
) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut scores = vec![0.0; n];
    let mut dag = ShortestPathDag::new(n);

    for u in 0..n as u32 {
        for w in 0..n as u32 {
            if u == w || !dag.build(graph, u, Some(w)) {
                continue;
            }
            let gap = (states.get(u) - states.get(w)).max(0.0);

            // Ancestors of w in the DAG, farthest from u first
            let mut ancestors = vec![w];
            let mut seen = vec![false; n];
            seen[w as usize] = true;
            let mut i = 0;
            while i < ancestors.len() {
                for &p in dag.predecessors(ancestors[i]) {
                    if !seen[p as usize] {
                        seen[p as usize] = true;
                        ancestors.push(p);
                    }
                }
                i += 1;
            }
            ancestors.sort_by_key(|&v| std::cmp::Reverse(dag.distance(v).unwrap_or(0)));

            let mut prob = vec![0.0; n];
            prob[w as usize] = 1.0;
            for &t in &ancestors {
                let preds = dag.predecessors(t);
                for &p in preds {
                    let share = match choice {
                        PredecessorChoice::Distinct => 1.0 / preds.len() as f64,
                        PredecessorChoice::PathWeighted => dag.path_count(p) / dag.path_count(t),
                    };
                    prob[p as usize] += prob[t as usize] * share;
                }
            }

            for &z in &ancestors {
                let d = denominators.get(z);
                if z != u && z != w && d > 0.0 {
                    scores[z as usize] += prob[z as usize] * gap / d;
                }
            }
        }
    }

    let pairs = (n * n.saturating_sub(1)) as f64;
    scores.iter_mut().for_each(|s| *s /= pairs);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Only vertex 0 has a positive state, so only walks starting at 0 score.
    /// From 0, vertex 3 is reached over {1, 2} and vertex 6 over 3 (two paths)
    /// or 5 (one path).
    fn fan_in_scores(choice: PredecessorChoice) -> Vec<f64> {
        let graph = build_test_graph(
            7,
            &[
                (0, 1),
                (0, 2),
                (1, 3),
                (2, 3),
                (0, 4),
                (4, 5),
                (3, 6),
                (5, 6),
            ],
            false,
        );
        let mut values = vec![0.0; 7];
        values[0] = 1.0;
        let states = PercolationStates::from_slots(&graph, values).unwrap();
        let table = DenominatorTable::build(&graph, &states).unwrap();
        expected_walk_scores(&graph, &states, &table, choice)
    }

    fn assert_scaled(scores: &[f64], expected: &[f64]) {
        for (slot, (got, want)) in scores.iter().zip(expected).enumerate() {
            assert!(
                (got - want / 42.0).abs() < 1e-12,
                "slot {}: {} vs {}",
                slot,
                got,
                want / 42.0
            );
        }
    }

    #[test]
    fn test_walk_expectation_distinct() {
        let scores = fan_in_scores(PredecessorChoice::Distinct);
        assert_scaled(&scores, &[0.0, 0.75, 0.75, 0.5, 1.5, 0.5, 0.0]);
    }

    #[test]
    fn test_walk_expectation_path_weighted() {
        let scores = fan_in_scores(PredecessorChoice::PathWeighted);
        assert_scaled(
            &scores,
            &[0.0, 5.0 / 6.0, 5.0 / 6.0, 2.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0, 0.0],
        );
    }
}
