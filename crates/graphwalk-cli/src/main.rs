#![allow(clippy::doc_markdown)]
//! graphwalk - step through DFS and BFS on small undirected graphs.
//!
//! Headless `run` and `demo` modes print visitation orders; `repl` builds a
//! graph interactively and pulls traversal events one key press at a time.

mod commands;
mod render;
mod repl;
mod repl_commands;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use graphwalk_core::config::{DEFAULT_CONFIG_FILE, MAX_STEP_DELAY_MS};
use graphwalk_core::{GraphwalkConfig, NodeId, OutputFormat, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::RunRequest;

/// graphwalk - visualize graph traversals as a stream of events
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "GRAPHWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Traverse a graph given as edges and print the visitation order
    Run(RunArgs),

    /// Traverse the built-in reference graph from node 0 with every strategy
    Demo,

    /// Build a graph interactively and step through traversals
    Repl,

    /// Print the effective configuration
    Config,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Traversal strategy (recursive-dfs, iterative-dfs, bfs)
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Start node
    #[arg(short = 'n', long, default_value = "0", value_parser = parse_node_arg)]
    start: NodeId,

    /// Edges as `u-v` or `u,v`
    #[arg(value_parser = parse_edge_arg)]
    edges: Vec<(NodeId, NodeId)>,

    /// Print every event, not only the final order
    #[arg(short, long)]
    events: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Stop after this many events
    #[arg(short, long)]
    limit: Option<usize>,

    /// Pause between events, in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_STEP_DELAY_MS))]
    delay_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_node_arg(s: &str) -> Result<NodeId, String> {
    graphwalk_core::parse_node(s).map_err(|e| e.to_string())
}

fn parse_edge_arg(s: &str) -> Result<(NodeId, NodeId), String> {
    graphwalk_core::parse_edge(s).map_err(|e| e.to_string())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = GraphwalkConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    if cli.no_color {
        config.output.color = false;
    }
    if !config.output.color {
        colored::control::set_override(false);
    }

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Run(args) => {
            if let Some(format) = args.format {
                config.output.format = format.into();
            }
            let request = RunRequest {
                strategy: args.strategy.unwrap_or(config.traversal.default_strategy),
                start: args.start,
                edges: args.edges,
                show_events: args.events,
                limit: args.limit,
                delay: Duration::from_millis(args.delay_ms.unwrap_or(config.output.step_delay_ms)),
            };
            tracing::info!(
                strategy = %request.strategy,
                start = request.start,
                edges = request.edges.len(),
                "running traversal"
            );
            commands::cmd_run(&config, &request, &mut stdout)?;
        }
        Command::Demo => commands::cmd_demo(&config, &mut stdout)?,
        Command::Repl => {
            drop(stdout);
            repl::run(config)?;
        }
        Command::Config => commands::cmd_config(&config, &mut stdout)?,
    }

    Ok(())
}
