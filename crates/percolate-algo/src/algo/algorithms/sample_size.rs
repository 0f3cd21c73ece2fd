// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Sample-size bound from the vertex-diameter estimate.
//!
//! `r = ceil((c / epsilon^2) * (floor(log2(VD) - 2) + 1 - ln(delta)))`
//!
//! With probability at least `1 - delta`, `r` samples keep every estimate
//! within `epsilon` of the exact centrality.

use percolate_common::config::validate_accuracy;
use percolate_common::{PercolateError, Result};

pub struct SampleSize;

impl SampleSize {
    pub fn compute(
        epsilon: f64,
        delta: f64,
        diameter: u32,
        universal_constant: f64,
    ) -> Result<u64> {
        validate_accuracy(epsilon, delta, universal_constant)?;
        if diameter == 0 {
            return Err(PercolateError::DegenerateGraph {
                message: "vertex diameter estimate is 0".to_string(),
            });
        }

        // log2(1) = 0 would shrink the bound below the two-vertex case
        let vd = f64::from(diameter.max(2));
        let bound = (universal_constant / (epsilon * epsilon))
            * ((vd.log2() - 2.0).floor() + 1.0 - delta.ln());
        let r = bound.ceil().max(1.0);

        if !r.is_finite() || r >= u64::MAX as f64 {
            return Err(PercolateError::invalid_parameter(
                "epsilon",
                format!("sample size {} is not representable", r),
            ));
        }
        Ok(r as u64)
    }
}
