// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Percolation centrality approximation and its building blocks.

use rand::SeedableRng;
use rand::rngs::StdRng;

mod components;
pub use components::{ComponentsResult, weakly_connected_components};

mod diameter;
pub use diameter::{DiameterApprox, DiameterConfig, DiameterEstimate, estimate_diameter};

mod denominator;
pub use denominator::{DenominatorTable, build_denominator_table};

mod sample_size;
pub use sample_size::SampleSize;

mod path_sampler;
pub use path_sampler::PathSampler;

mod percolation;
pub use percolation::{
    PercolationCentrality, PercolationResult, SamplingStats, approximate_percolation_centrality,
};

/// Independent RNG for one `stream` of a seeded run.
pub(crate) fn stream_rng(seed: u64, stream: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
