// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::core::id::Vid;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PercolateError {
    /// Rejected before any sampling begins.
    #[error("Parameter '{name}' is invalid: {message}")]
    InvalidParameter { name: String, message: String },

    /// Too few vertices or a zero diameter estimate; the sample-size bound is undefined.
    #[error("Degenerate graph: {message}")]
    DegenerateGraph { message: String },

    #[error("No percolation state supplied for vertex {vertex}")]
    MissingPercolationState { vertex: Vid },

    #[error("Vertex {vertex} is not part of the graph")]
    UnknownVertex { vertex: Vid },

    #[error("Parse error{}: {message}", line_suffix(.line))]
    Parse { message: String, line: Option<usize> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PercolateError {
    pub fn invalid_parameter(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, PercolateError>;
