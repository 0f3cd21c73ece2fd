// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Sampling-based approximation of percolation centrality.
//!
//! Each of `r` iterations draws an ordered pair `(u, w)` of distinct vertices,
//! samples one shortest `u -> w` path and credits every interior vertex `z`
//! with `(1 / r) * max(x(u) - x(w), 0) / D(z)`. `r` comes from the
//! vertex-diameter estimate so that, with probability `1 - delta`, every
//! estimate is within `epsilon` of the exact value.
//!
//! Iterations run in fixed-size chunks on the rayon pool. Each chunk owns its
//! RNG stream, path scratch and accumulator; chunk results are summed along a
//! fixed binary tree, so a seed fixes the output bit for bit on any number of
//! threads.

use crate::algo::algorithms::denominator::DenominatorTable;
use crate::algo::algorithms::diameter::{DIAMETER_STREAM, DiameterApprox};
use crate::algo::algorithms::path_sampler::PathSampler;
use crate::algo::algorithms::sample_size::SampleSize;
use crate::algo::algorithms::stream_rng;
use crate::algo::states::{PercolationStates, SortedPercolationOrder};
use crate::algo::view::GraphView;
use percolate_common::core::id::Vid;
use percolate_common::{PercolationConfig, Result};
use std::collections::HashMap;
use std::ops::Range;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

pub struct PercolationCentrality;

/// Per-run sampling counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingStats {
    /// Iterations whose pair was connected.
    pub paths_sampled: u64,
    /// Iterations whose pair had no path; they contribute nothing.
    pub no_path: u64,
    /// Interior vertices skipped because their denominator is zero.
    pub zero_denominator: u64,
}

impl SamplingStats {
    fn merge(&mut self, other: &SamplingStats) {
        self.paths_sampled += other.paths_sampled;
        self.no_path += other.no_path;
        self.zero_denominator += other.zero_denominator;
    }
}

#[derive(Debug, Clone)]
pub struct PercolationResult {
    /// One estimate per vertex, in slot order.
    pub scores: Vec<(Vid, f64)>,
    pub diameter_estimate: u32,
    /// Sampling iterations performed (0 for trivial graphs).
    pub sample_count: u64,
    pub stats: SamplingStats,
}

impl PercolationResult {
    pub fn score(&self, vid: Vid) -> Option<f64> {
        self.scores.iter().find(|(v, _)| *v == vid).map(|(_, s)| *s)
    }

    /// The `n` highest estimates, descending; ties by vertex id.
    pub fn top(&self, n: usize) -> Vec<(Vid, f64)> {
        let mut sorted = self.scores.clone();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        sorted.truncate(n);
        sorted
    }
}

impl PercolationCentrality {
    #[instrument(
        skip(graph, states, config),
        fields(vertices = graph.vertex_count(), sample_count, duration_ms)
    )]
    pub fn run<G: GraphView>(
        graph: &G,
        states: &PercolationStates,
        config: &PercolationConfig,
    ) -> Result<PercolationResult> {
        let start = Instant::now();
        config.validate()?;

        let n = graph.vertex_count();
        states.ensure_matches(graph)?;
        if config.directed != graph.is_directed() {
            warn!(
                requested = config.directed,
                projection = graph.is_directed(),
                "Direction flag disagrees with the projection; using the projection"
            );
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        debug!(seed, "Sampling seed");

        if n < 2 {
            debug!(vertices = n, "Fewer than two vertices, all estimates are zero");
            return Ok(trivial_result(graph));
        }

        let mut diameter_rng = stream_rng(seed, DIAMETER_STREAM);
        let diameter =
            DiameterApprox::run_with_rng(graph, graph.is_directed(), &mut diameter_rng).value;
        if diameter == 0 {
            debug!("No edges between distinct vertices, all estimates are zero");
            return Ok(trivial_result(graph));
        }

        let r = match config.sample_count {
            Some(r) => r,
            None => SampleSize::compute(
                config.epsilon,
                config.delta,
                diameter,
                config.universal_constant,
            )?,
        };
        tracing::Span::current().record("sample_count", r);
        info!(diameter, sample_count = r, "Sampling shortest paths");

        let order = SortedPercolationOrder::new(states);
        let denominators = DenominatorTable::build_with(&order, config.denominator);

        let ctx = SamplingContext {
            graph,
            states,
            denominators: &denominators,
            config,
            seed,
            sample_count: r,
        };
        let chunks = r.div_ceil(config.chunk_size as u64);
        let outcome = accumulate(&ctx, 0..chunks);

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::Span::current().record("duration_ms", duration_ms);
        if outcome.stats.zero_denominator > 0 {
            debug!(
                occurrences = outcome.stats.zero_denominator,
                "Skipped contributions to vertices with zero denominator"
            );
        }
        info!(
            paths_sampled = outcome.stats.paths_sampled,
            no_path = outcome.stats.no_path,
            duration_ms,
            "Percolation centrality approximation complete"
        );

        let scores = outcome
            .estimates
            .into_iter()
            .enumerate()
            .map(|(slot, score)| (graph.to_vid(slot as u32), score))
            .collect();

        Ok(PercolationResult {
            scores,
            diameter_estimate: diameter,
            sample_count: r,
            stats: outcome.stats,
        })
    }
}

fn trivial_result<G: GraphView>(graph: &G) -> PercolationResult {
    PercolationResult {
        scores: graph.vertices().map(|(_, vid)| (vid, 0.0)).collect(),
        diameter_estimate: 0,
        sample_count: 0,
        stats: SamplingStats::default(),
    }
}

/// Read-only state shared by every chunk.
struct SamplingContext<'a, G: GraphView> {
    graph: &'a G,
    states: &'a PercolationStates,
    denominators: &'a DenominatorTable,
    config: &'a PercolationConfig,
    seed: u64,
    sample_count: u64,
}

struct ChunkOutcome {
    estimates: Vec<f64>,
    stats: SamplingStats,
}

impl ChunkOutcome {
    fn merge(mut self, other: ChunkOutcome) -> ChunkOutcome {
        for (acc, value) in self.estimates.iter_mut().zip(other.estimates) {
            *acc += value;
        }
        self.stats.merge(&other.stats);
        self
    }
}

/// Split the chunk range in halves until single chunks remain. The tree shape
/// depends only on the range, never on scheduling.
fn accumulate<G: GraphView>(ctx: &SamplingContext<'_, G>, chunks: Range<u64>) -> ChunkOutcome {
    if chunks.end - chunks.start <= 1 {
        return run_chunk(ctx, chunks.start);
    }
    let mid = chunks.start + (chunks.end - chunks.start) / 2;
    let (left, right) = rayon::join(
        || accumulate(ctx, chunks.start..mid),
        || accumulate(ctx, mid..chunks.end),
    );
    left.merge(right)
}

fn run_chunk<G: GraphView>(ctx: &SamplingContext<'_, G>, chunk: u64) -> ChunkOutcome {
    let n = ctx.graph.vertex_count();
    let chunk_size = ctx.config.chunk_size as u64;
    let first = chunk * chunk_size;
    let iterations = chunk_size.min(ctx.sample_count.saturating_sub(first));

    // Stream 0 belongs to the diameter sweep
    let mut rng = stream_rng(ctx.seed, chunk + 1);
    let mut sampler = PathSampler::new(ctx.graph, ctx.config.predecessor_choice);
    let mut path = Vec::new();
    let mut estimates = vec![0.0; n];
    let mut stats = SamplingStats::default();
    let r = ctx.sample_count as f64;

    for _ in 0..iterations {
        let pair = rand::seq::index::sample(&mut rng, n, 2);
        let (u, w) = (pair.index(0) as u32, pair.index(1) as u32);

        if !sampler.sample_into(u, w, &mut rng, &mut path) {
            stats.no_path += 1;
            continue;
        }
        stats.paths_sampled += 1;

        let weight = (ctx.states.get(u) - ctx.states.get(w)).max(0.0) / r;
        if path.len() <= 2 {
            continue;
        }
        // path runs w ... u; the endpoints are never credited
        for &z in &path[1..path.len() - 1] {
            let d = ctx.denominators.get(z);
            if d == 0.0 {
                stats.zero_denominator += 1;
                continue;
            }
            estimates[z as usize] += weight / d;
        }
    }

    ChunkOutcome { estimates, stats }
}

/// Approximate percolation centrality of every vertex.
///
/// `states` must hold a finite value for every vertex of `graph`. Uses the
/// default predecessor choice and denominators with a fresh random seed.
pub fn approximate_percolation_centrality<G: GraphView>(
    graph: &G,
    states: &HashMap<Vid, f64>,
    directed: bool,
    epsilon: f64,
    delta: f64,
    universal_constant: f64,
) -> Result<Vec<(Vid, f64)>> {
    let config = PercolationConfig {
        epsilon,
        delta,
        universal_constant,
        directed,
        ..Default::default()
    };
    let states = PercolationStates::from_map(graph, states)?;
    Ok(PercolationCentrality::run(graph, &states, &config)?.scores)
}
