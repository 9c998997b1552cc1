//! Route command: single-source single-destination shortest path

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers;
use edgeway_core::error::Result;
use edgeway_core::graph::RouteResult;

pub fn execute(cli: &Cli, source: &str, dest: &str, start: Instant) -> Result<()> {
    let graph = helpers::load_graph(cli)?;
    if cli.verbose {
        eprintln!("load_edges: {:?}", start.elapsed());
    }

    let path = graph.dijkstra(&source.to_string(), &dest.to_string())?;
    let found = !path.is_empty();
    let total_cost = if found {
        graph.path_cost(&path).map(|cost| cost.value())
    } else {
        None
    };

    let result = RouteResult {
        from: source.to_string(),
        to: dest.to_string(),
        found,
        hops: path.len().saturating_sub(1),
        path,
        total_cost,
    };

    if cli.verbose {
        eprintln!("route: {:?}", start.elapsed());
    }

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if !result.found {
                if !cli.quiet {
                    println!("No route from {} to {}", result.from, result.to);
                }
            } else {
                let cost = result.total_cost.unwrap_or_default();
                println!("{} (cost {})", result.path.join(" -> "), cost);
            }
        }
        OutputFormat::Records => {
            println!(
                "H edgeway=1 records=1 mode=route from={} to={} found={}",
                result.from, result.to, result.found
            );
            for vertex in &result.path {
                println!("V {}", vertex);
            }
            if let Some(cost) = result.total_cost {
                println!("C {}", cost);
            }
        }
    }

    Ok(())
}
