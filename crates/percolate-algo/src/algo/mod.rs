// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Percolation Centrality Engine
//!
//! Approximates the percolation centrality of every vertex by sampling
//! shortest paths between random vertex pairs.
//!
//! # Architecture
//!
//! - **GraphView**: read-only, slot-indexed graph seam. Any `Sync` adjacency
//!   structure can implement it.
//! - **GraphProjection**: the bundled dense CSR implementation, built with
//!   [`ProjectionBuilder`].
//! - **Algorithms**: diameter estimate, denominators, sample-size bound, path
//!   sampler and the parallel accumulator in [`algorithms`].
//!
//! # Example
//!
//! ```
//! use percolate_algo::algo::{PercolationStates, ProjectionBuilder};
//! use percolate_algo::algo::algorithms::PercolationCentrality;
//! use percolate_common::{PercolationConfig, Vid};
//!
//! let graph = ProjectionBuilder::new()
//!     .edges((0..4u64).map(|i| (Vid::from(i), Vid::from(i + 1))))
//!     .build();
//! let states = PercolationStates::from_slots(&graph, vec![0.1, 0.9, 0.5, 0.2, 0.8])?;
//!
//! let config = PercolationConfig { seed: Some(7), ..Default::default() };
//! let result = PercolationCentrality::run(&graph, &states, &config)?;
//! assert_eq!(result.scores.len(), 5);
//! # Ok::<(), percolate_common::PercolateError>(())
//! ```

mod id_map;
pub mod projection;
pub mod states;
pub mod traversal;
pub mod view;

pub mod algorithms;

pub use id_map::IdMap;
pub use projection::{GraphProjection, ProjectionBuilder};
pub use states::{PercolationStates, SortedPercolationOrder};
pub use traversal::{BfsDistances, ShortestPathDag};
pub use view::{Direction, GraphView};

#[cfg(test)]
pub mod test_utils;
