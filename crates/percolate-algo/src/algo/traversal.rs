// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Breadth-first traversal primitives over a [`GraphView`].
//!
//! - [`BfsDistances`]: single-source hop distances.
//! - [`ShortestPathDag`]: BFS layering with predecessor sets and shortest-path
//!   counts, i.e. the implicit set of all shortest paths from one source.
//!
//! Both keep O(V) scratch buffers that are reset lazily (only touched slots),
//! so one instance can be reused across many searches on large graphs.

use crate::algo::view::{Direction, GraphView};
use std::collections::VecDeque;

const UNVISITED: u32 = u32::MAX;

/// Reusable single-source hop distances.
#[derive(Debug)]
pub struct BfsDistances {
    dist: Vec<u32>,
    order: Vec<u32>,
    queue: VecDeque<u32>,
}

impl BfsDistances {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![UNVISITED; vertex_count],
            order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Run BFS from `source`, replacing the previous result.
    pub fn run<G: GraphView>(&mut self, graph: &G, source: u32, direction: Direction) {
        for &v in &self.order {
            self.dist[v as usize] = UNVISITED;
        }
        self.order.clear();
        self.queue.clear();

        self.dist[source as usize] = 0;
        self.queue.push_back(source);

        while let Some(v) = self.queue.pop_front() {
            self.order.push(v);
            let next = self.dist[v as usize] + 1;
            for w in graph.neighbors(v, direction) {
                if self.dist[w as usize] == UNVISITED {
                    self.dist[w as usize] = next;
                    self.queue.push_back(w);
                }
            }
        }
    }

    /// Reached slots in visit order (source first).
    pub fn reached(&self) -> &[u32] {
        &self.order
    }

    pub fn distance(&self, slot: u32) -> Option<u32> {
        match self.dist[slot as usize] {
            UNVISITED => None,
            d => Some(d),
        }
    }
}

/// Shortest-path DAG rooted at one source.
///
/// `predecessors(v)` holds every neighbor of `v` one BFS layer closer to the
/// source, which is exactly the set of second-to-last vertices over all
/// shortest paths from the source to `v`. `path_count(v)` is the number of
/// such paths (kept as `f64`; counts can grow exponentially).
#[derive(Debug)]
pub struct ShortestPathDag {
    dist: Vec<u32>,
    sigma: Vec<f64>,
    preds: Vec<Vec<u32>>,
    touched: Vec<u32>,
    queue: VecDeque<u32>,
}

impl ShortestPathDag {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![UNVISITED; vertex_count],
            sigma: vec![0.0; vertex_count],
            preds: vec![Vec::new(); vertex_count],
            touched: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        for &v in &self.touched {
            self.dist[v as usize] = UNVISITED;
            self.sigma[v as usize] = 0.0;
            self.preds[v as usize].clear();
        }
        self.touched.clear();
        self.queue.clear();
    }

    /// Build the DAG from `source` along outgoing edges.
    ///
    /// With `Some(target)` the search stops as soon as the target's layer is
    /// complete: every vertex strictly closer than the target has been
    /// expanded, so the predecessor sets and path counts of the target and of
    /// everything on its shortest paths are final. Returns whether the target
    /// (or, without a target, the source) was reached.
    pub fn build<G: GraphView>(&mut self, graph: &G, source: u32, target: Option<u32>) -> bool {
        self.reset();

        self.dist[source as usize] = 0;
        self.sigma[source as usize] = 1.0;
        self.touched.push(source);
        self.queue.push_back(source);

        while let Some(v) = self.queue.pop_front() {
            let dist_v = self.dist[v as usize];

            if let Some(t) = target {
                let dist_t = self.dist[t as usize];
                if dist_t != UNVISITED && dist_v >= dist_t {
                    break;
                }
            }

            for &w in graph.out_neighbors(v) {
                // Path discovery
                if self.dist[w as usize] == UNVISITED {
                    self.dist[w as usize] = dist_v + 1;
                    self.touched.push(w);
                    self.queue.push_back(w);
                }
                // Path counting
                if self.dist[w as usize] == dist_v + 1 {
                    self.sigma[w as usize] += self.sigma[v as usize];
                    self.preds[w as usize].push(v);
                }
            }
        }

        target.is_none_or(|t| self.dist[t as usize] != UNVISITED)
    }

    pub fn distance(&self, slot: u32) -> Option<u32> {
        match self.dist[slot as usize] {
            UNVISITED => None,
            d => Some(d),
        }
    }

    /// Distinct predecessors of `slot` on shortest paths from the source.
    pub fn predecessors(&self, slot: u32) -> &[u32] {
        &self.preds[slot as usize]
    }

    /// Number of shortest paths from the source to `slot`.
    pub fn path_count(&self, slot: u32) -> f64 {
        self.sigma[slot as usize]
    }
}
