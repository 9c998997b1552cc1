//! Command dispatch logic for edgeway
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{edges, neighbours, route, vertices};
use edgeway_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Route { source, dest }) => route::execute(cli, source, dest, start),

        Some(Commands::Vertices) => vertices::execute(cli, start),

        Some(Commands::Neighbours { vertex }) => neighbours::execute(cli, vertex, start),

        Some(Commands::Edge { command }) => edges::execute(cli, command, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("edgeway {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Shortest-path queries over weighted edge lists.");
    println!();
    println!("Run `edgeway --help` for usage information.");
    Ok(())
}
