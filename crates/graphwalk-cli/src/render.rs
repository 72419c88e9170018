//! Terminal rendering of traversal events.
//!
//! The engine only says what happened; this module keeps the highlight state
//! a visual front end would hold (current node, path edges, visit order) and
//! prints each event as it is pulled.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use graphwalk_core::{format_order, NodeId, OutputFormat, TraversalEvent};

/// Highlight state of one run, reset before each new run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Highlight {
    current: Option<NodeId>,
    order: Vec<NodeId>,
    path: Vec<(NodeId, NodeId)>,
}

impl Highlight {
    /// Applies one event.
    pub fn apply(&mut self, event: &TraversalEvent) {
        match *event {
            TraversalEvent::NodeVisited { node } => {
                self.current = Some(node);
                self.order.push(node);
            }
            TraversalEvent::EdgeTraversed { from, to } => self.path.push((from, to)),
        }
    }

    /// Clears all highlights.
    pub fn reset(&mut self) {
        self.current = None;
        self.order.clear();
        self.path.clear();
    }

    /// Node highlighted as current.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Visited nodes in emission order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Edges marked on the traversal path.
    pub fn path(&self) -> &[(NodeId, NodeId)] {
        &self.path
    }
}

/// Writes events in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct EventPrinter {
    format: OutputFormat,
}

impl EventPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes one event line.
    pub fn event<W: Write>(&self, out: &mut W, event: &TraversalEvent) -> Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(event)?)?,
            OutputFormat::Plain => match *event {
                TraversalEvent::NodeVisited { node } => {
                    writeln!(out, "{} {}", "visit".green().bold(), node)?;
                }
                TraversalEvent::EdgeTraversed { from, to } => {
                    writeln!(out, "{} {}-{}", "edge".yellow().bold(), from, to)?;
                }
            },
        }
        Ok(())
    }

    /// Writes the visitation order, space-separated in plain mode.
    pub fn order<W: Write>(&self, out: &mut W, strategy: &str, highlight: &Highlight) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let summary = serde_json::json!({
                    "strategy": strategy,
                    "order": highlight.order(),
                    "path": highlight.path(),
                });
                writeln!(out, "{summary}")?;
            }
            OutputFormat::Plain => writeln!(out, "{}", format_order(highlight.order()))?,
        }
        Ok(())
    }
}
