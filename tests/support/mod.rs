use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Directed sample graph; the unique cheapest a -> e route is
/// a -> c -> d -> e at cost 26.
pub const SAMPLE_EDGES: &str = "\
a b 7
a c 9
a f 14
b c 10
b d 15
c d 11
c f 2
d e 6
e f 9
";

/// Get a Command for edgeway
pub fn edgeway() -> Command {
    cargo_bin_cmd!("edgeway")
}

/// Write an edge-list file into a temp dir and return its path
pub fn write_edges(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("edges.txt");
    fs::write(&path, content).unwrap();
    path
}
