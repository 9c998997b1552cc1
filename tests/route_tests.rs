//! Route command tests

mod support;

use predicates::prelude::*;
use support::{edgeway, write_edges, SAMPLE_EDGES};
use tempfile::tempdir;

#[test]
fn test_route_sample_graph() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    edgeway()
        .args(["--edges", path.to_str().unwrap(), "route", "a", "e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> c -> d -> e (cost 26)"));
}

#[test]
fn test_route_json_output() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    let output = edgeway()
        .args([
            "--edges",
            path.to_str().unwrap(),
            "--format",
            "json",
            "route",
            "a",
            "e",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["found"], serde_json::json!(true));
    assert_eq!(result["path"], serde_json::json!(["a", "c", "d", "e"]));
    assert_eq!(result["hops"], serde_json::json!(3));
    assert_eq!(result["total_cost"], serde_json::json!(26.0));
}

#[test]
fn test_route_records_output() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    edgeway()
        .args([
            "--edges",
            path.to_str().unwrap(),
            "--format",
            "records",
            "route",
            "a",
            "e",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H edgeway=1 records=1 mode=route from=a to=e found=true",
        ))
        .stdout(predicate::str::contains("V a\nV c\nV d\nV e\nC 26\n"));
}

#[test]
fn test_route_unreachable_is_success_with_empty_path() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, "a b 1\nc d 1\n");

    edgeway()
        .args(["--edges", path.to_str().unwrap(), "route", "a", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No route from a to d"));
}

#[test]
fn test_route_unreachable_json_reports_not_found() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, "a b 1\nc d 1\n");

    let output = edgeway()
        .args([
            "--edges",
            path.to_str().unwrap(),
            "--format",
            "json",
            "route",
            "a",
            "d",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["found"], serde_json::json!(false));
    assert_eq!(result["path"], serde_json::json!([]));
    assert!(result.get("total_cost").is_none());
}

#[test]
fn test_route_unknown_destination() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    edgeway()
        .args(["--edges", path.to_str().unwrap(), "route", "a", "z"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown destination vertex: z"));
}

#[test]
fn test_route_unknown_source() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    edgeway()
        .args(["--edges", path.to_str().unwrap(), "route", "z", "a"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("unknown source vertex: z"));
}

#[test]
fn test_route_source_equals_dest() {
    let dir = tempdir().unwrap();
    let path = write_edges(&dir, SAMPLE_EDGES);

    edgeway()
        .args(["--edges", path.to_str().unwrap(), "route", "a", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a (cost 0)"));
}

#[test]
fn test_route_reads_stdin() {
    edgeway()
        .args(["--edges", "-", "route", "a", "e"])
        .write_stdin(SAMPLE_EDGES)
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> c -> d -> e (cost 26)"));
}
