//! CLI argument parsing for edgeway
//!
//! Uses clap for argument parsing. Global flags: --edges, --format,
//! --quiet, --verbose, --log-level, --log-json

pub mod edges;
pub mod format;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use edges::EdgeCommands;
pub use format::OutputFormat;

/// Edgeway - shortest-path queries over weighted edge lists
#[derive(Parser, Debug)]
#[command(name = "edgeway")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file to operate on ("-" reads stdin)
    #[arg(long, global = true, env = "EDGEWAY_EDGES", default_value = "edges.txt")]
    pub edges: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two vertices
    Route {
        /// Vertex to start from
        source: String,

        /// Vertex to reach
        dest: String,
    },

    /// List every distinct vertex in the edge list
    Vertices,

    /// List the outgoing edges of a vertex
    Neighbours {
        /// Vertex to inspect
        vertex: String,
    },

    /// Inspect and modify the edge list
    Edge {
        #[command(subcommand)]
        command: EdgeCommands,
    },
}
