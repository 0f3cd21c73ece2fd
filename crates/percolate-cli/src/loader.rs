// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Input loaders: SNAP edge lists and percolation state files.

use percolate_algo::{GraphView, PercolationStates};
use percolate_common::{PercolateError, Result, Vid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Parsed edge list. Weights are validated and then dropped; paths are
/// hop-count based.
#[derive(Debug, Default)]
pub struct EdgeList {
    pub edges: Vec<(Vid, Vid)>,
    pub weighted_lines: usize,
}

/// Whitespace-separated `src dst [weight]` lines. Blank lines and lines whose
/// first token starts with `#` are skipped.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut list = EdgeList::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        if first.starts_with('#') {
            continue;
        }
        let Some(second) = tokens.next() else {
            return Err(parse_error(line_no, "expected `src dst [weight]`"));
        };
        let src = parse_token::<Vid>(first, line_no, "source id")?;
        let dst = parse_token::<Vid>(second, line_no, "target id")?;
        if let Some(weight) = tokens.next() {
            parse_token::<f64>(weight, line_no, "weight")?;
            list.weighted_lines += 1;
        }
        list.edges.push((src, dst));
    }
    Ok(list)
}

pub fn read_edge_list(path: &Path) -> Result<EdgeList> {
    parse_edge_list(BufReader::new(File::open(path)?))
}

/// `vid value` lines; `#` comments and blank lines are skipped.
pub fn parse_states<R: BufRead>(reader: R) -> Result<HashMap<Vid, f64>> {
    let mut states = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [first, ..] if first.starts_with('#') => continue,
            [vid, value] => {
                let vid = parse_token::<Vid>(vid, line_no, "vertex id")?;
                let value = parse_token::<f64>(value, line_no, "state")?;
                if !value.is_finite() {
                    return Err(parse_error(line_no, format!("state {} is not finite", value)));
                }
                if states.insert(vid, value).is_some() {
                    return Err(parse_error(line_no, format!("duplicate state for vertex {}", vid)));
                }
            }
            _ => return Err(parse_error(line_no, "expected `vid value`")),
        }
    }
    Ok(states)
}

pub fn read_states(path: &Path) -> Result<HashMap<Vid, f64>> {
    parse_states(BufReader::new(File::open(path)?))
}

/// Uniform `[0, 1)` state for every vertex.
pub fn random_states<G: GraphView>(graph: &G, seed: u64) -> Result<PercolationStates> {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..graph.vertex_count())
        .map(|_| rng.gen_range(0.0..1.0))
        .collect();
    PercolationStates::from_slots(graph, values)
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {} '{}'", what, token)))
}

fn parse_error(line: usize, message: impl Into<String>) -> PercolateError {
    PercolateError::Parse {
        message: message.into(),
        line: Some(line),
    }
}
