// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Double-sweep vertex-diameter approximation.
//!
//! For every weakly connected component: BFS from one uniformly random member
//! `v`, take the two largest path lengths (in vertices) from `v`, and sum them
//! minus the two copies of `v`. In hops this is `ecc(v) + second(v)`, which lies
//! in `[ecc(v), 2 * ecc(v)]` and therefore in `[ceil(D / 2), 2D]` for a
//! component of diameter `D`. The estimate is the maximum over components.
//!
//! This only sizes the sample budget. It is not the exact diameter and is
//! never reported as one.
//!
//! Complexity: O(V + E).

use crate::algo::algorithms::components::weakly_connected_components;
use crate::algo::algorithms::stream_rng;
use crate::algo::traversal::BfsDistances;
use crate::algo::view::{Direction, GraphView};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// RNG stream reserved for the diameter sweep.
pub(crate) const DIAMETER_STREAM: u64 = 0;

pub struct DiameterApprox;

#[derive(Debug, Clone, Default)]
pub struct DiameterConfig {
    /// Directed graphs are swept over their underlying undirected connectivity.
    pub directed: bool,
    /// `None` draws a fresh seed.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiameterEstimate {
    pub value: u32,
    pub component_count: usize,
}

impl DiameterApprox {
    pub fn run<G: GraphView>(graph: &G, config: DiameterConfig) -> DiameterEstimate {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = stream_rng(seed, DIAMETER_STREAM);
        Self::run_with_rng(graph, config.directed, &mut rng)
    }

    pub fn run_with_rng<G: GraphView, R: Rng + ?Sized>(
        graph: &G,
        directed: bool,
        rng: &mut R,
    ) -> DiameterEstimate {
        let direction = if directed {
            Direction::Both
        } else {
            Direction::Outgoing
        };

        let components = weakly_connected_components(graph);
        let mut bfs = BfsDistances::new(graph.vertex_count());
        let mut best = 0u32;

        for members in components.members() {
            let Some(&start) = members.choose(rng) else {
                continue;
            };
            bfs.run(graph, start, direction);

            let (first, second) = two_longest_paths(&bfs);
            // Single-vertex components give 1 + 0 - 2 < 0, i.e. no contribution
            let contribution = (first + second).saturating_sub(2);
            best = best.max(contribution);
        }

        debug!(
            components = components.component_count,
            estimate = best,
            "Estimated vertex diameter"
        );

        DiameterEstimate {
            value: best,
            component_count: components.component_count,
        }
    }
}

/// Largest and second-largest path lengths, in vertices, among reached slots.
/// Removing the farthest vertex once means a tie for first place counts twice.
fn two_longest_paths(bfs: &BfsDistances) -> (u32, u32) {
    let mut first = 0u32;
    let mut second = 0u32;
    for &slot in bfs.reached() {
        let len = bfs.distance(slot).map_or(0, |d| d + 1);
        if len > first {
            second = first;
            first = len;
        } else if len > second {
            second = len;
        }
    }
    (first, second)
}

/// Approximate the vertex diameter with a fresh random seed.
pub fn estimate_diameter<G: GraphView>(graph: &G, directed: bool) -> u32 {
    DiameterApprox::run(
        graph,
        DiameterConfig {
            directed,
            seed: None,
        },
    )
    .value
}
