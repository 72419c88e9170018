//! Headless subcommands: `run`, `demo` and `config`.

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use graphwalk_core::{
    GraphStore, GraphwalkConfig, NodeId, Strategy, TraversalEngine, REFERENCE_EDGES,
};

use crate::render::{EventPrinter, Highlight};

/// Parameters of a single headless traversal.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub strategy: Strategy,
    pub start: NodeId,
    pub edges: Vec<(NodeId, NodeId)>,
    pub show_events: bool,
    pub limit: Option<usize>,
    pub delay: Duration,
}

/// Builds a store honoring the configured duplicate-edge policy.
pub fn build_store(config: &GraphwalkConfig, edges: &[(NodeId, NodeId)]) -> Result<GraphStore> {
    let mut store = config.new_store();
    for &(u, v) in edges {
        store
            .add_edge(u, v)
            .with_context(|| format!("Failed to add edge {u}-{v}"))?;
    }
    Ok(store)
}

/// Runs one traversal, writing events (if requested) and the visitation order.
///
/// Events are pulled one at a time; `limit` stops pulling early and `delay`
/// paces the pulls.
pub fn cmd_run<W: Write>(
    config: &GraphwalkConfig,
    request: &RunRequest,
    out: &mut W,
) -> Result<Highlight> {
    let store = build_store(config, &request.edges)?;
    if !store.contains_node(request.start) {
        tracing::info!(
            start = request.start,
            "start node has no edges; it only traverses to itself"
        );
    }

    let engine = TraversalEngine::with_options(&store, config.traversal_options());
    let printer = EventPrinter::new(config.output.format);
    let mut highlight = Highlight::default();

    let events = engine
        .run(request.strategy, request.start)
        .take(request.limit.unwrap_or(usize::MAX));
    for (i, event) in events.enumerate() {
        if i > 0 && !request.delay.is_zero() {
            thread::sleep(request.delay);
        }
        highlight.apply(&event);
        if request.show_events {
            printer.event(out, &event)?;
            out.flush()?;
        }
    }

    printer.order(out, request.strategy.name(), &highlight)?;
    Ok(highlight)
}

/// Traverses the reference graph from node 0 with every strategy.
pub fn cmd_demo<W: Write>(config: &GraphwalkConfig, out: &mut W) -> Result<()> {
    let store = build_store(config, &REFERENCE_EDGES)?;
    let engine = TraversalEngine::with_options(&store, config.traversal_options());
    let printer = EventPrinter::new(config.output.format);

    let mut highlight = Highlight::default();
    for strategy in Strategy::ALL {
        highlight.reset();
        for event in engine.run(strategy, 0) {
            highlight.apply(&event);
        }
        printer.order(out, strategy.name(), &highlight)?;
    }
    Ok(())
}

/// Prints the effective configuration as TOML.
pub fn cmd_config<W: Write>(config: &GraphwalkConfig, out: &mut W) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}
