// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use crate::api::error::PercolateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// External vertex identifier (64 bits).
///
/// Identifiers are whatever the caller's graph uses (e.g. the integer node ids
/// of a SNAP edge list). They must stay stable for the lifetime of a
/// computation; algorithms work on dense slots and only map back to `Vid` when
/// producing results.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vid(u64);

impl Vid {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Vid {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl From<Vid> for u64 {
    fn from(vid: Vid) -> Self {
        vid.0
    }
}

impl fmt::Debug for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vid({})", self.0)
    }
}

impl fmt::Display for Vid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Vid {
    type Err = PercolateError;

    /// Parses a Vid from its decimal representation.
    ///
    /// # Errors
    ///
    /// Returns [`PercolateError::Parse`] if the string is not an unsigned
    /// 64-bit integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| PercolateError::Parse {
                message: format!("Invalid vertex id '{}': {}", s, e),
                line: None,
            })
    }
}
