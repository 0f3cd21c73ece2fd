// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod algo;

pub use algo::algorithms::{
    DenominatorTable, DiameterApprox, DiameterConfig, DiameterEstimate, PathSampler,
    PercolationCentrality, PercolationResult, SampleSize, SamplingStats,
    approximate_percolation_centrality, build_denominator_table, estimate_diameter,
};
pub use algo::projection::{GraphProjection, ProjectionBuilder};
pub use algo::{Direction, GraphView, PercolationStates};
pub use percolate_common::{
    DEFAULT_UNIVERSAL_CONSTANT, DenominatorKind, PercolateError, PercolationConfig,
    PredecessorChoice, Result, Vid,
};
