// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::{PercolateError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Constant of the sample-size upper bound used when none is given.
pub const DEFAULT_UNIVERSAL_CONSTANT: f64 = 0.5;

/// How the backward walk picks the next vertex among the predecessors of the
/// current tail in the shortest-path DAG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredecessorChoice {
    /// Uniform over the distinct predecessor vertices, regardless of how many
    /// shortest paths run through each of them.
    #[default]
    Distinct,
    /// Predecessor `p` of `t` is chosen with probability `sigma(p) / sigma(t)`.
    /// The resulting path is uniform over the whole shortest-path set.
    PathWeighted,
}

/// Per-vertex normalization denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominatorKind {
    /// `D(v) = sum_u max(x(u) - x(v), 0)`.
    #[default]
    VertexGap,
    /// `D(v) = sum_{s,t != v} max(x(s) - x(t), 0)`: the total percolation
    /// difference over ordered pairs that do not involve `v`.
    PairsExcludingVertex,
}

/// Configuration for the percolation centrality approximation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PercolationConfig {
    /// Additive error bound (default: 0.05)
    pub epsilon: f64,

    /// Failure probability; the bound holds with probability `1 - delta` (default: 0.1)
    pub delta: f64,

    /// Constant of the sample-size bound (default: 0.5)
    pub universal_constant: f64,

    /// Expected directedness of the graph (default: false). Advisory only:
    /// the projection's own directedness decides, and a mismatch is logged.
    pub directed: bool,

    /// Seed for all randomness. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Fixed number of sampling iterations, bypassing the (epsilon, delta) bound.
    pub sample_count: Option<u64>,

    /// Sampling iterations per worker chunk (default: 1024)
    pub chunk_size: usize,

    pub predecessor_choice: PredecessorChoice,

    pub denominator: DenominatorKind,
}

impl Default for PercolationConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.05,
            delta: 0.1,
            universal_constant: DEFAULT_UNIVERSAL_CONSTANT,
            directed: false,
            seed: None,
            sample_count: None,
            chunk_size: 1024,
            predecessor_choice: PredecessorChoice::default(),
            denominator: DenominatorKind::default(),
        }
    }
}

impl PercolationConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Check the accuracy parameters and chunking before any work is done.
    pub fn validate(&self) -> Result<()> {
        validate_accuracy(self.epsilon, self.delta, self.universal_constant)?;
        if self.chunk_size == 0 {
            return Err(PercolateError::invalid_parameter(
                "chunk_size",
                "must be at least 1",
            ));
        }
        if self.sample_count == Some(0) {
            return Err(PercolateError::invalid_parameter(
                "sample_count",
                "must be at least 1 when given",
            ));
        }
        Ok(())
    }
}

/// Validate an (epsilon, delta, universal constant) triple.
pub fn validate_accuracy(epsilon: f64, delta: f64, universal_constant: f64) -> Result<()> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(PercolateError::invalid_parameter(
            "epsilon",
            format!("must be a positive finite number, got {}", epsilon),
        ));
    }
    if !(delta > 0.0 && delta < 1.0) {
        return Err(PercolateError::invalid_parameter(
            "delta",
            format!("must lie in (0, 1), got {}", delta),
        ));
    }
    if !(universal_constant.is_finite() && universal_constant > 0.0) {
        return Err(PercolateError::invalid_parameter(
            "universal_constant",
            format!("must be a positive finite number, got {}", universal_constant),
        ));
    }
    Ok(())
}
