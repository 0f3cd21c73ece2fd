// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

pub mod api {
    pub mod error;
}

pub mod config;

pub mod core {
    pub mod id;
}

// Re-exports for convenience
pub use api::error::{PercolateError, Result};
pub use config::{
    DEFAULT_UNIVERSAL_CONSTANT, DenominatorKind, PercolationConfig, PredecessorChoice,
};
pub use core::id::Vid;
