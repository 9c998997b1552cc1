//! Shared helpers for command handlers

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::Cli;
use edgeway_core::error::{EdgewayError, Result};
use edgeway_core::graph::{parse_edge_list, render_edge_list, Graph};

/// Whether the global --edges argument points at stdin
pub fn reads_stdin(cli: &Cli) -> bool {
    cli.edges == Path::new("-")
}

/// Load and parse the edge list named by --edges
pub fn load_graph(cli: &Cli) -> Result<Graph<String>> {
    let input = if reads_stdin(cli) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.edges).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                EdgewayError::EdgeListNotFound {
                    path: cli.edges.clone(),
                }
            } else {
                EdgewayError::Io(err)
            }
        })?
    };

    Ok(Graph::new(parse_edge_list(&input)?))
}

/// Write the graph's edges back to the --edges file
pub fn save_graph(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    if reads_stdin(cli) {
        return Err(EdgewayError::UsageError(
            "cannot rewrite an edge list read from stdin; use --edges <file>".to_string(),
        ));
    }
    fs::write(&cli.edges, render_edge_list(graph.edges()))?;
    Ok(())
}
