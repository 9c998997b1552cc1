//! Neighbours command: outgoing edges of a single vertex

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers;
use edgeway_core::error::{EdgewayError, Result, VertexRole};
use edgeway_core::graph::NeighbourEntry;

pub fn execute(cli: &Cli, vertex: &str, start: Instant) -> Result<()> {
    let graph = helpers::load_graph(cli)?;
    if cli.verbose {
        eprintln!("load_edges: {:?}", start.elapsed());
    }

    let key = vertex.to_string();
    let mut neighbours = graph.neighbours();
    let Some(adjacent) = neighbours.remove(&key) else {
        return Err(EdgewayError::UnknownVertex {
            role: VertexRole::Query,
            vertex: key,
        });
    };

    let mut entries: Vec<NeighbourEntry> = adjacent
        .into_iter()
        .map(|(to, cost)| NeighbourEntry {
            to,
            cost: cost.value(),
        })
        .collect();
    // Sort for determinism
    entries.sort_by(|a, b| a.to.cmp(&b.to).then_with(|| a.cost.total_cmp(&b.cost)));

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No outgoing edges from {}", vertex);
                }
            } else {
                for entry in &entries {
                    println!("{} -> {} (cost {})", vertex, entry.to, entry.cost);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H edgeway=1 records=1 mode=neighbours vertex={} count={}",
                vertex,
                entries.len()
            );
            for entry in &entries {
                println!("E {} {} {}", vertex, entry.to, entry.cost);
            }
        }
    }

    Ok(())
}
