// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Read-only graph interface consumed by the sampling engine.

use percolate_common::core::id::Vid;

/// Direction for neighbor traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Outgoing,
    /// Union of outgoing and incoming edges (underlying undirected graph).
    Both,
}

/// Immutable, slot-indexed view of a graph.
///
/// Vertices are addressed by dense slots `0..vertex_count()`. For undirected
/// graphs every edge is visible from both endpoints through
/// [`out_neighbors`](GraphView::out_neighbors), and `in_neighbors` returns the
/// same slice.
///
/// Implementations must be `Sync`: the sampling loop reads one view from many
/// worker threads.
pub trait GraphView: Sync {
    fn vertex_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Successors of `slot`.
    fn out_neighbors(&self, slot: u32) -> &[u32];

    /// Predecessors of `slot`.
    fn in_neighbors(&self, slot: u32) -> &[u32];

    fn to_vid(&self, slot: u32) -> Vid;

    fn to_slot(&self, vid: Vid) -> Option<u32>;

    /// Neighbors of `slot` in the given direction. `Both` may yield a vertex
    /// twice when edges run both ways.
    fn neighbors(&self, slot: u32, direction: Direction) -> impl Iterator<Item = u32> + '_ {
        let none: &[u32] = &[];
        let (first, second) = match direction {
            Direction::Outgoing => (self.out_neighbors(slot), none),
            Direction::Both if self.is_directed() => {
                (self.out_neighbors(slot), self.in_neighbors(slot))
            }
            Direction::Both => (self.out_neighbors(slot), none),
        };
        first.iter().chain(second.iter()).copied()
    }

    /// Iterate over all vertices as (slot, vid).
    fn vertices(&self) -> impl Iterator<Item = (u32, Vid)> + '_ {
        (0..self.vertex_count() as u32).map(|slot| (slot, self.to_vid(slot)))
    }
}
