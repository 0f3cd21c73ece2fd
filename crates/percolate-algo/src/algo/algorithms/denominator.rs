// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Per-vertex normalization of percolation contributions.
//!
//! Two normalizations are available, both computed from one ascending sort of
//! the states in O(n log n):
//!
//! - [`DenominatorKind::VertexGap`]: `D(v) = Σ_u max(x(u) - x(v), 0)`.
//! - [`DenominatorKind::PairsExcludingVertex`]:
//!   `D(v) = Σ_{s,t ≠ v} max(x(s) - x(t), 0)`, the normalization of the
//!   published percolation centrality definition.
//!
//! With `a_0 <= ... <= a_{n-1}` the vertex gap is
//! `D_j = (S_n - S_j) - (n - j) a_j`. It is evaluated backwards as
//! `D_{n-1} = 0`, `D_j = D_{j+1} + (n - 1 - j)(a_{j+1} - a_j)` so that every
//! vertex tied at the maximum gets an exact `0.0`.

use crate::algo::states::{PercolationStates, SortedPercolationOrder};
use crate::algo::view::GraphView;
use percolate_common::core::id::Vid;
use percolate_common::{DenominatorKind, Result};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DenominatorTable {
    kind: DenominatorKind,
    values: Vec<f64>,
}

impl DenominatorTable {
    /// Vertex-gap denominators for every vertex of `graph`.
    ///
    /// Fails if `states` was built for a graph with a different vertex count.
    pub fn build<G: GraphView>(graph: &G, states: &PercolationStates) -> Result<Self> {
        states.ensure_matches(graph)?;
        Ok(Self::build_with(
            &SortedPercolationOrder::new(states),
            DenominatorKind::VertexGap,
        ))
    }

    pub fn build_with(order: &SortedPercolationOrder, kind: DenominatorKind) -> Self {
        let values = match kind {
            DenominatorKind::VertexGap => vertex_gaps(order),
            DenominatorKind::PairsExcludingVertex => pairs_excluding_vertex(order),
        };
        let table = Self { kind, values };
        debug!(
            kind = ?kind,
            vertices = table.values.len(),
            zeros = table.zero_count(),
            "Built denominator table"
        );
        table
    }

    pub fn kind(&self) -> DenominatorKind {
        self.kind
    }

    #[inline]
    pub fn get(&self, slot: u32) -> f64 {
        self.values[slot as usize]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Vertices whose contributions are forced to zero.
    pub fn zero_count(&self) -> usize {
        self.values.iter().filter(|&&d| d == 0.0).count()
    }

    pub fn to_vids<G: GraphView>(&self, graph: &G) -> Vec<(Vid, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(slot, &d)| (graph.to_vid(slot as u32), d))
            .collect()
    }
}

fn vertex_gaps(order: &SortedPercolationOrder) -> Vec<f64> {
    let entries = order.entries();
    let n = entries.len();
    let mut values = vec![0.0; n];

    let mut running = 0.0;
    for j in (0..n.saturating_sub(1)).rev() {
        let (slot, a_j) = entries[j];
        let a_next = entries[j + 1].1;
        // a_next >= a_j, so each step adds a non-negative amount
        running += (n - 1 - j) as f64 * (a_next - a_j);
        values[slot as usize] = running;
    }
    values
}

fn pairs_excluding_vertex(order: &SortedPercolationOrder) -> Vec<f64> {
    let entries = order.entries();
    let n = entries.len();

    // prefix[j] = a_0 + ... + a_{j-1}
    let mut prefix = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    for &(_, a) in entries {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + a);
    }
    let total = prefix[n];

    // Σ over all ordered pairs of max(x_s - x_t, 0)
    let all_pairs: f64 = entries
        .iter()
        .enumerate()
        .map(|(j, &(_, a))| j as f64 * a - prefix[j])
        .sum();

    let mut values = vec![0.0; n];
    for (j, &(slot, a)) in entries.iter().enumerate() {
        // Pairs touching v contribute Σ_u |x_u - x_v|
        let touching = a * (2.0 * j as f64 - n as f64) + total - 2.0 * prefix[j];
        values[slot as usize] = (all_pairs - touching).max(0.0);
    }
    values
}

/// Vertex-gap denominator of every vertex, keyed by vertex id.
pub fn build_denominator_table<G: GraphView>(
    graph: &G,
    states: &PercolationStates,
) -> Result<Vec<(Vid, f64)>> {
    Ok(DenominatorTable::build(graph, states)?.to_vids(graph))
}
