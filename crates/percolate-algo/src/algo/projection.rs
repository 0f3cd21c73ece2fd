// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Graph Projection - Dense CSR representation for algorithm execution.
//!
//! A `GraphProjection` is a materialized, algorithm-optimized view of a graph.
//! It provides:
//! - Dense vertex indexing (0..V) for efficient array-based state
//! - CSR format for cache-friendly neighbor iteration
//! - Reverse edges for directed graphs (undirected graphs share one CSR)
//!
//! Self-loops are dropped and parallel edges collapsed while building, so
//! every neighbor list is duplicate-free.

use crate::algo::IdMap;
use crate::algo::view::GraphView;
use percolate_common::core::id::Vid;
use tracing::{debug, warn};

/// Edge list for CSR construction: (source_slot, destination_slot) pairs.
type EdgeList = Vec<(u32, u32)>;

/// Dense CSR representation optimized for algorithm execution.
#[derive(Debug)]
pub struct GraphProjection {
    /// Number of vertices in the projection
    pub(crate) vertex_count: usize,

    pub(crate) directed: bool,

    /// Outbound edges: CSR format
    pub(crate) out_offsets: Vec<u32>, // [V+1] vertex slot -> edge start
    pub(crate) out_neighbors: Vec<u32>, // [E] neighbor slots

    /// Inbound edges: CSR format (directed only)
    pub(crate) in_offsets: Vec<u32>, // [V+1]
    pub(crate) in_neighbors: Vec<u32>, // [E]

    /// Identity mapping
    pub(crate) id_map: IdMap,
}

impl GraphProjection {
    /// Number of edges. Undirected edges are counted once.
    pub fn edge_count(&self) -> usize {
        if self.directed {
            self.out_neighbors.len()
        } else {
            self.out_neighbors.len() / 2
        }
    }

    /// Memory usage in bytes.
    pub fn memory_size(&self) -> usize {
        (self.out_offsets.len()
            + self.out_neighbors.len()
            + self.in_offsets.len()
            + self.in_neighbors.len())
            * 4
            + self.id_map.memory_size()
    }
}

impl GraphView for GraphProjection {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    fn out_neighbors(&self, slot: u32) -> &[u32] {
        let start = self.out_offsets[slot as usize] as usize;
        let end = self.out_offsets[slot as usize + 1] as usize;
        &self.out_neighbors[start..end]
    }

    #[inline]
    fn in_neighbors(&self, slot: u32) -> &[u32] {
        if !self.directed {
            return self.out_neighbors(slot);
        }
        let start = self.in_offsets[slot as usize] as usize;
        let end = self.in_offsets[slot as usize + 1] as usize;
        &self.in_neighbors[start..end]
    }

    #[inline]
    fn to_vid(&self, slot: u32) -> Vid {
        self.id_map.to_vid_unchecked(slot)
    }

    #[inline]
    fn to_slot(&self, vid: Vid) -> Option<u32> {
        self.id_map.to_slot(vid)
    }
}

/// Builder for constructing a `GraphProjection` from vertices and edges.
///
/// # Example
///
/// ```
/// use percolate_algo::algo::{GraphView, ProjectionBuilder};
/// use percolate_common::Vid;
///
/// let graph = ProjectionBuilder::new()
///     .directed(false)
///     .edge(Vid::from(1), Vid::from(2))
///     .edge(Vid::from(2), Vid::from(3))
///     .vertex(Vid::from(9))
///     .build();
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ProjectionBuilder {
    directed: bool,
    vertices: Vec<Vid>,
    edges: Vec<(Vid, Vid)>,
}

impl ProjectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat edges as directed (default: undirected).
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add an isolated vertex (vertices on edges are added implicitly).
    pub fn vertex(mut self, vid: Vid) -> Self {
        self.vertices.push(vid);
        self
    }

    pub fn vertices(mut self, vids: impl IntoIterator<Item = Vid>) -> Self {
        self.vertices.extend(vids);
        self
    }

    pub fn edge(mut self, src: Vid, dst: Vid) -> Self {
        self.edges.push((src, dst));
        self
    }

    pub fn edges(mut self, edges: impl IntoIterator<Item = (Vid, Vid)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Build the projection.
    pub fn build(self) -> GraphProjection {
        // Slots follow ascending vid order
        let mut all_vids = self.vertices;
        all_vids.reserve(self.edges.len() * 2);
        for &(src, dst) in &self.edges {
            all_vids.push(src);
            all_vids.push(dst);
        }
        all_vids.sort_unstable();
        all_vids.dedup();

        let id_map = IdMap::from_sorted(all_vids);
        let vertex_count = id_map.len();

        let mut out_edges: EdgeList = Vec::with_capacity(self.edges.len() * 2);
        let mut self_loops = 0usize;
        for (src, dst) in self.edges {
            if src == dst {
                self_loops += 1;
                continue;
            }
            let (Some(s), Some(d)) = (id_map.to_slot(src), id_map.to_slot(dst)) else {
                continue;
            };
            out_edges.push((s, d));
            if !self.directed {
                out_edges.push((d, s));
            }
        }
        if self_loops > 0 {
            warn!(self_loops, "Dropping self-loops from projection");
        }

        out_edges.sort_unstable();
        out_edges.dedup();

        let (out_offsets, out_neighbors) = build_csr(vertex_count, &out_edges);
        let (in_offsets, in_neighbors) = if self.directed {
            let mut in_edges: EdgeList = out_edges.iter().map(|&(s, d)| (d, s)).collect();
            in_edges.sort_unstable();
            build_csr(vertex_count, &in_edges)
        } else {
            (Vec::new(), Vec::new())
        };

        debug!(
            vertices = vertex_count,
            adjacency_entries = out_neighbors.len(),
            directed = self.directed,
            "Built graph projection"
        );

        GraphProjection {
            vertex_count,
            directed: self.directed,
            out_offsets,
            out_neighbors,
            in_offsets,
            in_neighbors,
            id_map,
        }
    }
}

/// Build CSR from an edge list.
fn build_csr(vertex_count: usize, edges: &[(u32, u32)]) -> (Vec<u32>, Vec<u32>) {
    if vertex_count == 0 {
        return (vec![0], Vec::new());
    }

    // Count degrees
    let mut degrees = vec![0u32; vertex_count];
    for &(src, _) in edges {
        degrees[src as usize] += 1;
    }

    // Build offsets (prefix sum)
    let mut offsets = vec![0u32; vertex_count + 1];
    for i in 0..vertex_count {
        offsets[i + 1] = offsets[i] + degrees[i];
    }

    // Fill neighbors
    let mut neighbors = vec![0u32; edges.len()];
    let mut current = offsets.clone();

    for &(src, dst) in edges {
        let idx = current[src as usize] as usize;
        neighbors[idx] = dst;
        current[src as usize] += 1;
    }

    (offsets, neighbors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_csr() {
        // Triangle: 0 -> 1, 1 -> 2, 2 -> 0, plus 0 -> 2
        let edges = vec![(0, 1), (0, 2), (1, 2), (2, 0)];
        let (offsets, neighbors) = build_csr(3, &edges);

        assert_eq!(offsets, vec![0, 2, 3, 4]);
        assert_eq!(&neighbors[0..2], &[1, 2]);
        assert_eq!(&neighbors[2..3], &[2]);
        assert_eq!(&neighbors[3..4], &[0]);
    }

    #[test]
    fn test_undirected_projection_is_symmetric() {
        let graph = ProjectionBuilder::new()
            .edge(Vid::from(10), Vid::from(20))
            .edge(Vid::from(20), Vid::from(30))
            .build();

        assert!(!graph.is_directed());
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        let s20 = graph.to_slot(Vid::from(20)).unwrap();
        let mut n: Vec<Vid> = graph
            .out_neighbors(s20)
            .iter()
            .map(|&s| graph.to_vid(s))
            .collect();
        n.sort();
        assert_eq!(n, vec![Vid::from(10), Vid::from(30)]);
        assert_eq!(graph.in_neighbors(s20), graph.out_neighbors(s20));
    }

    #[test]
    fn test_directed_projection_has_reverse_edges() {
        let graph = ProjectionBuilder::new()
            .directed(true)
            .edge(Vid::from(1), Vid::from(2))
            .edge(Vid::from(3), Vid::from(2))
            .build();

        let s1 = graph.to_slot(Vid::from(1)).unwrap();
        let s2 = graph.to_slot(Vid::from(2)).unwrap();
        let s3 = graph.to_slot(Vid::from(3)).unwrap();

        assert_eq!(graph.out_neighbors(s1), &[s2]);
        assert!(graph.out_neighbors(s2).is_empty());
        assert_eq!(graph.in_neighbors(s2), &[s1, s3]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loops_and_duplicates_are_dropped() {
        let graph = ProjectionBuilder::new()
            .edge(Vid::from(1), Vid::from(1))
            .edge(Vid::from(1), Vid::from(2))
            .edge(Vid::from(2), Vid::from(1))
            .edge(Vid::from(1), Vid::from(2))
            .build();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        let s1 = graph.to_slot(Vid::from(1)).unwrap();
        assert_eq!(graph.out_neighbors(s1).len(), 1);
    }

    #[test]
    fn test_isolated_vertices_are_kept() {
        let graph = ProjectionBuilder::new()
            .vertices([Vid::from(5), Vid::from(6)])
            .build();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.out_neighbors(0).is_empty());
        assert!(graph.memory_size() > 0);
    }
}
