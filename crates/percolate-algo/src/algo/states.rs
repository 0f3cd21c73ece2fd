// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Percolation states aligned to projection slots.

use crate::algo::view::GraphView;
use percolate_common::core::id::Vid;
use percolate_common::{PercolateError, Result};
use std::collections::HashMap;

/// Per-vertex percolation state `x(v)`, indexed by slot.
///
/// Values are finite reals, typically in `[0, 1]`. Built once per
/// (graph, state assignment) pair and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStates {
    values: Vec<f64>,
}

impl PercolationStates {
    /// Align a caller-supplied mapping to the graph's slots.
    ///
    /// Every vertex of the graph needs a finite value. Entries for vertices
    /// outside the graph are rejected rather than silently ignored.
    pub fn from_map<G: GraphView>(graph: &G, states: &HashMap<Vid, f64>) -> Result<Self> {
        if let Some(vid) = states.keys().find(|vid| graph.to_slot(**vid).is_none()) {
            return Err(PercolateError::UnknownVertex { vertex: *vid });
        }

        let values = graph
            .vertices()
            .map(|(_, vid)| match states.get(&vid) {
                Some(&x) => Ok(x),
                None => Err(PercolateError::MissingPercolationState { vertex: vid }),
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::from_slots(graph, values)
    }

    /// Use values already ordered by slot.
    pub fn from_slots<G: GraphView>(graph: &G, values: Vec<f64>) -> Result<Self> {
        check_len(graph.vertex_count(), values.len())?;
        if let Some(slot) = values.iter().position(|x| !x.is_finite()) {
            return Err(PercolateError::invalid_parameter(
                "percolation_states",
                format!(
                    "state of vertex {} is not finite ({})",
                    graph.to_vid(slot as u32),
                    values[slot]
                ),
            ));
        }
        Ok(Self { values })
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

    /// Fails unless there is one state per vertex of `graph`.
    pub fn ensure_matches<G: GraphView>(&self, graph: &G) -> Result<()> {
        check_len(graph.vertex_count(), self.values.len())
    }
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(PercolateError::invalid_parameter(
            "percolation_states",
            format!("expected {} values, got {}", expected, got),
        ));
    }
    Ok(())
}

/// Vertices ordered by ascending percolation state, as explicit `(slot, x)` pairs.
///
/// Ties keep slot order; nothing downstream depends on how ties are broken.
#[derive(Debug, Clone)]
pub struct SortedPercolationOrder {
    entries: Vec<(u32, f64)>,
}

impl SortedPercolationOrder {
    pub fn new(states: &PercolationStates) -> Self {
        let mut entries: Vec<(u32, f64)> = states
            .as_slice()
            .iter()
            .enumerate()
            .map(|(slot, &x)| (slot as u32, x))
            .collect();
        // States are finite, so total_cmp agrees with numeric order
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
