// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Random shortest-path sampling between a pair of vertices.
//!
//! The set of all shortest `u -> w` paths is kept implicitly as the BFS
//! predecessor DAG rooted at `u`. One path is drawn by walking backward from
//! `w`: at each tail the next vertex is picked among the tail's DAG
//! predecessors until `u` is reached. Only the vertices of the drawn path are
//! ever materialized.

use crate::algo::traversal::ShortestPathDag;
use crate::algo::view::GraphView;
use percolate_common::PredecessorChoice;
use rand::Rng;

/// Reusable sampler; holds O(V) scratch, so keep one per worker.
pub struct PathSampler<'g, G: GraphView> {
    graph: &'g G,
    dag: ShortestPathDag,
    choice: PredecessorChoice,
}

impl<'g, G: GraphView> PathSampler<'g, G> {
    pub fn new(graph: &'g G, choice: PredecessorChoice) -> Self {
        Self {
            graph,
            dag: ShortestPathDag::new(graph.vertex_count()),
            choice,
        }
    }

    /// Draw one shortest path from `u` to `w` into `path`, listed from `w`
    /// back to `u`. Returns `false`, leaving `path` empty, when `w` is not
    /// reachable from `u`.
    pub fn sample_into<R: Rng + ?Sized>(
        &mut self,
        u: u32,
        w: u32,
        rng: &mut R,
        path: &mut Vec<u32>,
    ) -> bool {
        path.clear();
        if u == w {
            path.push(u);
            return true;
        }
        if !self.dag.build(self.graph, u, Some(w)) {
            return false;
        }

        path.push(w);
        let mut tail = w;
        while tail != u {
            let Some(next) = self.next_predecessor(tail, rng) else {
                // Every reached vertex other than the source has a predecessor
                path.clear();
                return false;
            };
            path.push(next);
            tail = next;
        }
        true
    }

    /// Allocating form of [`Self::sample_into`].
    pub fn sample<R: Rng + ?Sized>(&mut self, u: u32, w: u32, rng: &mut R) -> Option<Vec<u32>> {
        let mut path = Vec::new();
        self.sample_into(u, w, rng, &mut path).then_some(path)
    }

    fn next_predecessor<R: Rng + ?Sized>(&self, tail: u32, rng: &mut R) -> Option<u32> {
        let preds = self.dag.predecessors(tail);
        if preds.is_empty() {
            return None;
        }
        match self.choice {
            PredecessorChoice::Distinct => Some(preds[rng.gen_range(0..preds.len())]),
            PredecessorChoice::PathWeighted => {
                // sigma(tail) is the sum of sigma over its predecessors
                let total = self.dag.path_count(tail);
                let mut target = rng.gen_range(0.0..total);
                for &p in preds {
                    let weight = self.dag.path_count(p);
                    if target < weight {
                        return Some(p);
                    }
                    target -= weight;
                }
                preds.last().copied()
            }
        }
    }
}
