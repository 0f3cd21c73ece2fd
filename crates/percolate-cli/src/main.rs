// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use percolate_algo::{
    DiameterApprox, DiameterConfig, GraphProjection, PercolationCentrality, PercolationStates,
    ProjectionBuilder,
};
use percolate_common::{DenominatorKind, PercolationConfig, PredecessorChoice};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

pub mod loader;
pub mod report;

#[derive(Parser)]
#[command(name = "percolate")]
#[command(
    about = "Approximate percolation centrality by shortest-path sampling",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Approximate the percolation centrality of every vertex
    Approx(ApproxArgs),
    /// Estimate the vertex diameter used to size the sample
    Diameter {
        /// SNAP edge list (`src dst [weight]` per line)
        #[arg(long)]
        graph: PathBuf,
        #[arg(long)]
        directed: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct ApproxArgs {
    /// SNAP edge list (`src dst [weight]` per line)
    #[arg(long)]
    graph: PathBuf,
    #[arg(long)]
    directed: bool,
    /// Additive error bound; several values run one after another
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    epsilon: Vec<f64>,
    /// Failure probability
    #[arg(long)]
    delta: Option<f64>,
    /// Constant of the sample-size bound
    #[arg(long = "constant")]
    universal_constant: Option<f64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Fixed number of samples instead of the (epsilon, delta) bound
    #[arg(long)]
    samples: Option<u64>,
    #[arg(long)]
    chunk_size: Option<usize>,
    #[arg(long, value_enum)]
    predecessor_choice: Option<ChoiceArg>,
    #[arg(long, value_enum)]
    denominator: Option<DenominatorArg>,
    /// `vid value` per line; random uniform states when omitted
    #[arg(long)]
    states: Option<PathBuf>,
    /// Runs per epsilon value
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    repeat: u64,
    /// Rows of the ranking table (0 disables it)
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// JSON configuration; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChoiceArg {
    Distinct,
    PathWeighted,
}

impl From<ChoiceArg> for PredecessorChoice {
    fn from(arg: ChoiceArg) -> Self {
        match arg {
            ChoiceArg::Distinct => PredecessorChoice::Distinct,
            ChoiceArg::PathWeighted => PredecessorChoice::PathWeighted,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DenominatorArg {
    VertexGap,
    PairsExcludingVertex,
}

impl From<DenominatorArg> for DenominatorKind {
    fn from(arg: DenominatorArg) -> Self {
        match arg {
            DenominatorArg::VertexGap => DenominatorKind::VertexGap,
            DenominatorArg::PairsExcludingVertex => DenominatorKind::PairsExcludingVertex,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Approx(args) => run_approx(args)?,
        Commands::Diameter {
            graph,
            directed,
            seed,
        } => {
            let graph = load_graph(&graph, directed)?;
            report::print_graph_summary(&graph);

            let start = Instant::now();
            let estimate = DiameterApprox::run(&graph, DiameterConfig { directed, seed });
            println!(
                "{} vertex diameter estimate {} over {} component(s) in {:.2}ms",
                "Success:".green(),
                estimate.value.to_string().bold(),
                estimate.component_count,
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
    }

    Ok(())
}

fn build_config(args: &ApproxArgs) -> Result<PercolationConfig> {
    let mut config = match &args.config {
        Some(path) => PercolationConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PercolationConfig::default(),
    };

    config.directed |= args.directed;
    if let Some(delta) = args.delta {
        config.delta = delta;
    }
    if let Some(c) = args.universal_constant {
        config.universal_constant = c;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.samples.is_some() {
        config.sample_count = args.samples;
    }
    if let Some(chunk_size) = args.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(choice) = args.predecessor_choice {
        config.predecessor_choice = choice.into();
    }
    if let Some(kind) = args.denominator {
        config.denominator = kind.into();
    }
    config.validate()?;
    Ok(config)
}

fn load_graph(path: &Path, directed: bool) -> Result<GraphProjection> {
    let list = loader::read_edge_list(path)
        .with_context(|| format!("failed to read edge list {}", path.display()))?;
    if list.weighted_lines > 0 {
        info!(
            lines = list.weighted_lines,
            "Edge weights are ignored; shortest paths count hops"
        );
    }
    Ok(ProjectionBuilder::new()
        .directed(directed)
        .edges(list.edges)
        .build())
}

fn load_states(
    args: &ApproxArgs,
    graph: &GraphProjection,
    seed: Option<u64>,
) -> Result<PercolationStates> {
    match &args.states {
        Some(path) => {
            let map = loader::read_states(path)
                .with_context(|| format!("failed to read states {}", path.display()))?;
            Ok(PercolationStates::from_map(graph, &map)?)
        }
        None => {
            let seed = seed.unwrap_or_else(rand::random);
            debug!(seed, "Drawing random percolation states");
            Ok(loader::random_states(graph, seed)?)
        }
    }
}

fn run_approx(args: ApproxArgs) -> Result<()> {
    let config = build_config(&args)?;
    let graph = load_graph(&args.graph, config.directed)?;
    report::print_graph_summary(&graph);

    let states = load_states(&args, &graph, config.seed)?;

    let epsilons = if args.epsilon.is_empty() {
        vec![config.epsilon]
    } else {
        args.epsilon.clone()
    };

    for epsilon in epsilons {
        let mut times = Vec::with_capacity(args.repeat as usize);
        for rep in 0..args.repeat {
            let run_config = PercolationConfig {
                epsilon,
                seed: config.seed.map(|s| s.wrapping_add(rep)),
                ..config.clone()
            };
            let start = Instant::now();
            let result = PercolationCentrality::run(&graph, &states, &run_config)
                .with_context(|| format!("approximation failed for epsilon {}", epsilon))?;
            let elapsed = start.elapsed();

            report::print_run(epsilon, rep as usize, &result, elapsed, args.top);
            times.push(elapsed);
        }
        report::print_epsilon_summary(epsilon, &times);
    }

    Ok(())
}
