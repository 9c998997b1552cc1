//! Vertices command: list the derived vertex set

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers;
use edgeway_core::error::Result;

pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let graph = helpers::load_graph(cli)?;
    if cli.verbose {
        eprintln!("load_edges: {:?}", start.elapsed());
    }

    let mut vertices: Vec<String> = graph.vertices().into_iter().collect();
    // Sort for determinism
    vertices.sort();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&vertices)?);
        }
        OutputFormat::Human => {
            if vertices.is_empty() {
                if !cli.quiet {
                    println!("No vertices");
                }
            } else {
                for vertex in &vertices {
                    println!("{}", vertex);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H edgeway=1 records=1 mode=vertices count={}",
                vertices.len()
            );
            for vertex in &vertices {
                println!("V {}", vertex);
            }
        }
    }

    Ok(())
}
