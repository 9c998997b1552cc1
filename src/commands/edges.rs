//! Edge management commands for edgeway
//!
//! - `edgeway edge list` - show the edge list
//! - `edgeway edge add <from> <to> [--cost <c>] [--one-way]` - insert an edge
//! - `edgeway edge remove <from> <to> [--one-way]` - delete matching edges

use std::time::Instant;

use crate::cli::{Cli, EdgeCommands, OutputFormat};
use crate::commands::helpers;
use edgeway_core::error::Result;
use edgeway_core::graph::Cost;

pub fn execute(cli: &Cli, command: &EdgeCommands, start: Instant) -> Result<()> {
    match command {
        EdgeCommands::List => execute_list(cli, start),

        EdgeCommands::Add {
            from,
            to,
            cost,
            one_way,
        } => execute_add(cli, from, to, *cost, *one_way, start),

        EdgeCommands::Remove { from, to, one_way } => {
            execute_remove(cli, from, to, *one_way, start)
        }
    }
}

fn execute_list(cli: &Cli, start: Instant) -> Result<()> {
    let graph = helpers::load_graph(cli)?;
    if cli.verbose {
        eprintln!("load_edges: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(graph.edges())?);
        }
        OutputFormat::Human => {
            if graph.edges().is_empty() {
                if !cli.quiet {
                    println!("No edges");
                }
            } else {
                for edge in graph.edges() {
                    println!("{} -> {} (cost {})", edge.start, edge.end, edge.cost);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H edgeway=1 records=1 mode=edge.list count={}",
                graph.edge_count()
            );
            for edge in graph.edges() {
                println!("E {} {} {}", edge.start, edge.end, edge.cost);
            }
        }
    }

    Ok(())
}

fn execute_add(
    cli: &Cli,
    from: &str,
    to: &str,
    cost: f64,
    one_way: bool,
    start: Instant,
) -> Result<()> {
    let mut graph = helpers::load_graph(cli)?;

    // A duplicate pair aborts here with no rewrite
    graph.add_edge(from.to_string(), to.to_string(), Cost::new(cost), !one_way)?;
    helpers::save_graph(cli, &graph)?;

    if cli.verbose {
        eprintln!("edge_add: {:?}", start.elapsed());
    }

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "added",
                        "from": from,
                        "to": to,
                        "cost": cost,
                        "mirrored": !one_way,
                    })
                );
            }
            OutputFormat::Human => {
                if one_way {
                    println!("Added edge {} -> {} (cost {})", from, to, cost);
                } else {
                    println!("Added edges {} <-> {} (cost {})", from, to, cost);
                }
            }
            OutputFormat::Records => {
                println!(
                    "H edgeway=1 records=1 mode=edge.add status=added from={} to={} cost={} mirrored={}",
                    from, to, cost, !one_way
                );
            }
        }
    }

    Ok(())
}

fn execute_remove(cli: &Cli, from: &str, to: &str, one_way: bool, start: Instant) -> Result<()> {
    let mut graph = helpers::load_graph(cli)?;

    let before = graph.edge_count();
    graph.remove_edge(&from.to_string(), &to.to_string(), !one_way);
    let removed = before - graph.edge_count();

    // Removing nothing is defined behavior, not an error; skip the rewrite
    if removed > 0 {
        helpers::save_graph(cli, &graph)?;
    }

    if cli.verbose {
        eprintln!("edge_remove: {:?}", start.elapsed());
    }

    let status = if removed > 0 { "removed" } else { "unchanged" };

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": status,
                        "from": from,
                        "to": to,
                        "removed": removed,
                    })
                );
            }
            OutputFormat::Human => {
                if removed == 0 {
                    println!("No matching edges between {} and {}", from, to);
                } else {
                    println!("Removed {} edge(s)", removed);
                }
            }
            OutputFormat::Records => {
                println!(
                    "H edgeway=1 records=1 mode=edge.remove from={} to={} removed={}",
                    from, to, removed
                );
            }
        }
    }

    Ok(())
}
