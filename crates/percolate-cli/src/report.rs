// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use colored::*;
use percolate_algo::{GraphProjection, GraphView, PercolationResult};
use prettytable::{Cell, Row, Table};
use std::time::Duration;

pub fn print_graph_summary(graph: &GraphProjection) {
    println!(
        "The graph has {} vertices and {} {} edges ({:.1} KiB in memory)",
        graph.vertex_count().to_string().bold(),
        graph.edge_count().to_string().bold(),
        if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        },
        graph.memory_size() as f64 / 1024.0
    );
}

pub fn print_run(
    epsilon: f64,
    rep: usize,
    result: &PercolationResult,
    elapsed: Duration,
    top: usize,
) {
    println!("{} epsilon {} run {}", "==>".cyan().bold(), epsilon, rep + 1);

    let zeros = result.scores.iter().filter(|(_, s)| *s == 0.0).count();
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Diameter est.").style_spec("bf"),
        Cell::new("Samples").style_spec("bf"),
        Cell::new("Paths").style_spec("bf"),
        Cell::new("No path").style_spec("bf"),
        Cell::new("Zero denom.").style_spec("bf"),
        Cell::new("Zeros").style_spec("bf"),
        Cell::new("Time (ms)").style_spec("bf"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&result.diameter_estimate.to_string()),
        Cell::new(&result.sample_count.to_string()),
        Cell::new(&result.stats.paths_sampled.to_string()),
        Cell::new(&result.stats.no_path.to_string()),
        Cell::new(&result.stats.zero_denominator.to_string()),
        Cell::new(&zeros.to_string()),
        Cell::new(&format!("{:.2}", elapsed.as_secs_f64() * 1000.0)),
    ]));
    table.printstd();

    if top == 0 {
        return;
    }
    let mut ranking = Table::new();
    ranking.add_row(Row::new(vec![
        Cell::new("Rank").style_spec("bf"),
        Cell::new("Vertex").style_spec("bf"),
        Cell::new("Estimate").style_spec("bf"),
    ]));
    for (rank, (vid, score)) in result.top(top).into_iter().enumerate() {
        ranking.add_row(Row::new(vec![
            Cell::new(&(rank + 1).to_string()),
            Cell::new(&vid.to_string()),
            Cell::new(&format!("{:.12}", score)),
        ]));
    }
    ranking.printstd();
}

pub fn print_epsilon_summary(epsilon: f64, times: &[Duration]) {
    if times.is_empty() {
        return;
    }
    let secs: Vec<f64> = times.iter().map(Duration::as_secs_f64).collect();
    let mean = secs.iter().sum::<f64>() / secs.len() as f64;
    println!(
        "{} epsilon {}: {} run(s), mean time {:.4}s",
        "Summary:".green(),
        epsilon,
        secs.len(),
        mean
    );
}
