//! Edge-list text parsing and rendering.
//!
//! The on-disk format is line oriented: one edge per line as
//! `<start> <end> [cost]`, whitespace separated, with the cost
//! defaulting to 1 when omitted. Blank lines and `#` comments are
//! skipped.

use std::fmt;

use crate::error::{EdgewayError, Result};

use super::edge::{Cost, Edge};

/// Parse an edge-list document into edges.
///
/// Every malformed line (wrong field count, unparseable cost) is
/// collected and reported together; no partial edge list is returned.
pub fn parse_edge_list(input: &str) -> Result<Vec<Edge<String>>> {
    let mut edges = Vec::new();
    let mut malformed = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [start, end] => edges.push(Edge::unit((*start).to_string(), (*end).to_string())),
            [start, end, cost] => match cost.parse::<f64>() {
                Ok(value) => edges.push(Edge::new(
                    (*start).to_string(),
                    (*end).to_string(),
                    Cost::new(value),
                )),
                Err(_) => malformed.push(describe(index, line)),
            },
            _ => malformed.push(describe(index, line)),
        }
    }

    if !malformed.is_empty() {
        return Err(EdgewayError::MalformedEdgeData { entries: malformed });
    }
    Ok(edges)
}

/// Render edges back to the text format.
///
/// The cost is always written, so a parse-render cycle normalizes
/// defaulted costs to an explicit `1`.
pub fn render_edge_list<V: fmt::Display>(edges: &[Edge<V>]) -> String {
    let mut output = String::new();
    for edge in edges {
        output.push_str(&format!("{} {} {}\n", edge.start, edge.end, edge.cost));
    }
    output
}

fn describe(index: usize, line: &str) -> String {
    format!("line {}: {:?}", index + 1, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_and_three_field_lines() {
        let edges = parse_edge_list("a b 7\nb c\n").unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].cost, Cost::new(7.0));
        assert_eq!(edges[1].cost, Cost::DEFAULT);
    }

    #[test]
    fn test_parse_skips_blanks_and_comments() {
        let edges = parse_edge_list("# sample graph\n\na b 7\n  \nb c 2\n").unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_parse_reports_every_malformed_line() {
        let err = parse_edge_list("a\na b 7\nw x y 4 5\n").unwrap_err();
        match err {
            EdgewayError::MalformedEdgeData { entries } => {
                assert_eq!(entries.len(), 2);
                assert!(entries[0].contains("line 1"));
                assert!(entries[0].contains("\"a\""));
                assert!(entries[1].contains("line 3"));
                assert!(entries[1].contains("\"w x y 4 5\""));
            }
            other => panic!("expected MalformedEdgeData, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unparseable_cost() {
        let err = parse_edge_list("a b heavy\n").unwrap_err();
        assert!(matches!(err, EdgewayError::MalformedEdgeData { .. }));
    }

    #[test]
    fn test_render_writes_explicit_costs() {
        let edges = vec![Edge::unit("a", "b"), Edge::new("b", "c", Cost::new(2.5))];
        assert_eq!(render_edge_list(&edges), "a b 1\nb c 2.5\n");
    }
}
