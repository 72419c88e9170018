//! Interactive session: build a graph with `edge` and watch traversals.

use std::io;

use anyhow::Result;
use colored::Colorize;
use graphwalk_core::{GraphStore, GraphwalkConfig, NodeId, Strategy, TraversalEngine};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::render::{EventPrinter, Highlight};
use crate::repl_commands::{handle_command, CommandResult};

const PROMPT: &str = "graphwalk> ";
const STEP_PROMPT: &str = "step> ";

/// Mutable state of one REPL session.
pub struct ReplSession {
    pub store: GraphStore,
    pub config: GraphwalkConfig,
    /// Highlights of the last run, shown by `show`.
    pub last_run: Highlight,
}

impl ReplSession {
    pub fn new(config: GraphwalkConfig) -> Self {
        Self {
            store: config.new_store(),
            config,
            last_run: Highlight::default(),
        }
    }
}

/// Runs the read-eval-print loop until `quit` or end of input.
pub fn run(config: GraphwalkConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut session = ReplSession::new(config);

    println!(
        "{} v{}  (type {} for commands)\n",
        "graphwalk".bold(),
        env!("CARGO_PKG_VERSION"),
        "help".yellow()
    );

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match handle_command(&mut session, line) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::Step(strategy, start) => {
                        step_through(&mut rl, &mut session, strategy, start)?;
                    }
                    CommandResult::Error(msg) => println!("{} {msg}\n", "Error:".red().bold()),
                }
            }
            Err(ReadlineError::Interrupted) => println!("^C (type quit to exit)"),
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Bye");
    Ok(())
}

/// Pulls one event per Enter until the run is exhausted or cancelled with `q`.
fn step_through(
    rl: &mut DefaultEditor,
    session: &mut ReplSession,
    strategy: Strategy,
    start: NodeId,
) -> Result<()> {
    let engine = TraversalEngine::with_options(&session.store, session.config.traversal_options());
    let printer = EventPrinter::new(session.config.output.format);
    let mut highlight = Highlight::default();
    let mut traversal = engine.run(strategy, start);

    println!(
        "Stepping {} from {} (Enter: next event, q: cancel)",
        strategy.label().bold(),
        start
    );

    loop {
        let prompt = match highlight.current() {
            Some(node) => format!("step @{node}> "),
            None => STEP_PROMPT.to_string(),
        };
        match rl.readline(&prompt) {
            Ok(input) if input.trim().eq_ignore_ascii_case("q") => {
                println!("Cancelled after {} visited nodes", traversal.visited_count());
                break;
            }
            Ok(_) => {
                let Some(event) = traversal.next() else {
                    println!("{}", "Traversal complete".green());
                    break;
                };
                highlight.apply(&event);
                printer.event(&mut io::stdout(), &event)?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Cancelled");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    printer.order(&mut io::stdout(), strategy.name(), &highlight)?;
    println!();
    session.last_run = highlight;
    Ok(())
}
