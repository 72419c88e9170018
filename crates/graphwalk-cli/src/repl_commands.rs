//! REPL command handlers.
//!
//! Each command is implemented as a separate function; stepping needs the
//! line editor and is driven by [`crate::repl`].

use std::io;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use graphwalk_core::{parse_node, NodeId, Strategy, TraversalEngine};

use crate::render::{EventPrinter, Highlight};
use crate::repl::ReplSession;

/// Result of a REPL command execution.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Quit,
    /// Pull events one key press at a time.
    Step(Strategy, NodeId),
    Error(String),
}

/// Handle one REPL input line.
pub fn handle_command(session: &mut ReplSession, line: &str) -> CommandResult {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().map(|s| s.to_lowercase()).unwrap_or_default();

    match cmd.as_str() {
        "" => CommandResult::Continue,
        "quit" | "exit" | "q" => CommandResult::Quit,
        "help" | "h" | "?" => {
            print_help();
            CommandResult::Continue
        }
        "edge" | "e" => cmd_edge(session, &parts),
        "reset" => cmd_reset(session),
        "show" => cmd_show(session),
        "run" => cmd_run(session, &parts),
        "step" => match parse_run_args(&parts) {
            Ok((strategy, start)) => CommandResult::Step(strategy, start),
            Err(e) => CommandResult::Error(e),
        },
        "strategies" => cmd_strategies(),
        _ => CommandResult::Error(format!("Unknown command: {cmd} (type 'help')")),
    }
}

fn cmd_edge(session: &mut ReplSession, parts: &[&str]) -> CommandResult {
    if parts.len() != 3 {
        return CommandResult::Error("Usage: edge <u> <v>".to_string());
    }
    let (u, v) = match (parse_node(parts[1]), parse_node(parts[2])) {
        (Ok(u), Ok(v)) => (u, v),
        (Err(e), _) | (_, Err(e)) => return CommandResult::Error(e.to_string()),
    };

    match session.store.add_edge(u, v) {
        Ok(true) => {
            session.last_run.reset();
            println!("Added edge {}\n", format!("{u}-{v}").green());
            CommandResult::Continue
        }
        Ok(false) => {
            println!("Edge {u}-{v} already present, ignored\n");
            CommandResult::Continue
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn cmd_reset(session: &mut ReplSession) -> CommandResult {
    session.store.reset();
    session.last_run.reset();
    println!("Graph cleared\n");
    CommandResult::Continue
}

fn cmd_show(session: &ReplSession) -> CommandResult {
    if session.store.is_empty() {
        println!("Graph is empty. Add edges with: edge <u> <v>\n");
        return CommandResult::Continue;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Node", "Neighbors", "Degree", "Visited"]);

    let order = session.last_run.order();
    for node in session.store.nodes() {
        let neighbors = session
            .store
            .neighbors_of(node)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let visited = match order.iter().position(|&n| n == node) {
            Some(rank) => Cell::new(format!("#{}", rank + 1)).fg(Color::Green),
            None => Cell::new("-"),
        };
        table.add_row(vec![
            Cell::new(node),
            Cell::new(neighbors),
            Cell::new(session.store.degree(node)),
            visited,
        ]);
    }

    println!("{table}");
    println!(
        "{} nodes, {} edges\n",
        session.store.node_count(),
        session.store.edge_count()
    );
    CommandResult::Continue
}

fn cmd_run(session: &mut ReplSession, parts: &[&str]) -> CommandResult {
    let (strategy, start) = match parse_run_args(parts) {
        Ok(args) => args,
        Err(e) => return CommandResult::Error(e),
    };

    let engine = TraversalEngine::with_options(&session.store, session.config.traversal_options());
    let printer = EventPrinter::new(session.config.output.format);
    let mut highlight = Highlight::default();
    let mut out = io::stdout().lock();

    for event in engine.run(strategy, start) {
        highlight.apply(&event);
        if let Err(e) = printer.event(&mut out, &event) {
            return CommandResult::Error(e.to_string());
        }
    }
    println!("{}", strategy.label().bold());
    if let Err(e) = printer.order(&mut out, strategy.name(), &highlight) {
        return CommandResult::Error(e.to_string());
    }
    println!();

    session.last_run = highlight;
    CommandResult::Continue
}

fn cmd_strategies() -> CommandResult {
    println!("{}", "Strategies:".bold());
    for strategy in Strategy::ALL {
        println!("  - {} ({})", strategy.name().green(), strategy.label());
    }
    println!();
    CommandResult::Continue
}

/// Parses `<cmd> <strategy> <start>`, defaulting the start node to 0.
fn parse_run_args(parts: &[&str]) -> Result<(Strategy, NodeId), String> {
    let strategy = parts
        .get(1)
        .ok_or_else(|| format!("Usage: {} <strategy> [start]", parts[0]))?
        .parse::<Strategy>()
        .map_err(|e| e.to_string())?;
    let start = match parts.get(2) {
        Some(text) => parse_node(text).map_err(|e| e.to_string())?,
        None => 0,
    };
    Ok((strategy, start))
}

/// Print help text for REPL commands
pub fn print_help() {
    println!("\n{}", "graphwalk REPL Commands".bold().underline());
    println!();
    println!("  {}          Add undirected edge u-v", "edge <u> <v>".yellow());
    println!("  {}                 Remove all nodes and edges", "reset".yellow());
    println!("  {}                  Show adjacency table", "show".yellow());
    println!(
        "  {}  Run a whole traversal",
        "run <strategy> [start]".yellow()
    );
    println!(
        "  {} Pull one event per Enter, q cancels",
        "step <strategy> [start]".yellow()
    );
    println!("  {}            List traversal strategies", "strategies".yellow());
    println!("  {}                  Show this help", "help".yellow());
    println!("  {}                  Exit the REPL", "quit".yellow());
    println!();
}
