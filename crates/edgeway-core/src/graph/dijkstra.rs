//! Single-source single-destination shortest path.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::error::{EdgewayError, Result, VertexRole};

use super::edge::Cost;
use super::Graph;

/// Find the cheapest path from `source` to `dest` using Dijkstra's
/// algorithm.
///
/// Returns the inclusive vertex sequence, or an empty Vec when `dest`
/// is unreachable from `source`. `source == dest` yields the
/// single-element path. Fails with `UnknownVertex` when either endpoint
/// is absent from the graph; the graph remains usable afterwards.
///
/// Minimum selection is a linear scan over the unvisited set, so the
/// running time is O(V^2 + E). When several unvisited vertices share
/// the minimum tentative distance the choice between them is arbitrary,
/// which can vary the route (never the cost) in graphs with multiple
/// equal-cost shortest paths.
#[tracing::instrument(skip_all, fields(source = %source, dest = %dest))]
pub fn shortest_path<V>(graph: &Graph<V>, source: &V, dest: &V) -> Result<Vec<V>>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    let vertices = graph.vertices();
    if !vertices.contains(source) {
        return Err(EdgewayError::UnknownVertex {
            role: VertexRole::Source,
            vertex: source.to_string(),
        });
    }
    if !vertices.contains(dest) {
        return Err(EdgewayError::UnknownVertex {
            role: VertexRole::Destination,
            vertex: dest.to_string(),
        });
    }
    if source == dest {
        return Ok(vec![source.clone()]);
    }

    let neighbours = graph.neighbours();
    let mut unvisited = vertices;
    let mut distances: HashMap<V, Cost> = HashMap::from([(source.clone(), Cost::ZERO)]);
    let mut predecessors: HashMap<V, V> = HashMap::new();

    while !unvisited.is_empty() {
        // Linear-scan minimum over the unvisited set
        let current = match unvisited
            .iter()
            .min_by_key(|vertex| tentative(&distances, vertex))
        {
            Some(vertex) => vertex.clone(),
            None => break,
        };

        let current_distance = tentative(&distances, &current);
        // Every remaining unvisited vertex is unreachable
        if !current_distance.is_finite() {
            break;
        }

        if let Some(adjacent) = neighbours.get(&current) {
            for (next, cost) in adjacent {
                let candidate = current_distance + *cost;
                if candidate < tentative(&distances, next) {
                    distances.insert(next.clone(), candidate);
                    predecessors.insert(next.clone(), current.clone());
                }
            }
        }

        unvisited.remove(&current);
    }

    tracing::debug!(settled = distances.len(), "relaxation complete");

    // Walk predecessor links backward from the destination
    let mut path = VecDeque::new();
    let mut current = dest.clone();
    while let Some(previous) = predecessors.get(&current) {
        path.push_front(current.clone());
        current = previous.clone();
    }
    if !path.is_empty() {
        path.push_front(current);
    }

    Ok(path.into_iter().collect())
}

fn tentative<V>(distances: &HashMap<V, Cost>, vertex: &V) -> Cost
where
    V: Eq + Hash,
{
    distances.get(vertex).copied().unwrap_or(Cost::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    /// Directed sample graph; the unique cheapest a -> e route is
    /// a -> c -> d -> e at cost 26.
    fn sample_graph() -> Graph<String> {
        let edges = [
            ("a", "b", 7.0),
            ("a", "c", 9.0),
            ("a", "f", 14.0),
            ("b", "c", 10.0),
            ("b", "d", 15.0),
            ("c", "d", 11.0),
            ("c", "f", 2.0),
            ("d", "e", 6.0),
            ("e", "f", 9.0),
        ];
        Graph::new(
            edges
                .iter()
                .map(|(start, end, cost)| {
                    Edge::new(start.to_string(), end.to_string(), Cost::new(*cost))
                })
                .collect(),
        )
    }

    #[test]
    fn test_shortest_path_sample_graph() {
        let g = sample_graph();
        let path = shortest_path(&g, &"a".to_string(), &"e".to_string()).unwrap();
        assert_eq!(path, ["a", "c", "d", "e"]);
        assert_eq!(g.path_cost(&path), Some(Cost::new(26.0)));
    }

    #[test]
    fn test_shortest_path_single_hop_beats_detour() {
        let g = sample_graph();
        let path = shortest_path(&g, &"a".to_string(), &"f".to_string()).unwrap();
        // a -> c -> f at 11 beats the direct a -> f at 14
        assert_eq!(path, ["a", "c", "f"]);
        assert_eq!(g.path_cost(&path), Some(Cost::new(11.0)));
    }

    #[test]
    fn test_unreachable_returns_empty_path() {
        let g = sample_graph();
        // Edges are one-directional; nothing leads back to "a"
        let path = shortest_path(&g, &"e".to_string(), &"a".to_string()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_source_equals_dest_returns_single_vertex() {
        let g = sample_graph();
        let path = shortest_path(&g, &"a".to_string(), &"a".to_string()).unwrap();
        assert_eq!(path, ["a"]);
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let g = sample_graph();
        let err = shortest_path(&g, &"z".to_string(), &"a".to_string()).unwrap_err();
        match err {
            EdgewayError::UnknownVertex { role, vertex } => {
                assert_eq!(role, VertexRole::Source);
                assert_eq!(vertex, "z");
            }
            other => panic!("expected UnknownVertex, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_dest_is_an_error() {
        let g = sample_graph();
        let err = shortest_path(&g, &"a".to_string(), &"z".to_string()).unwrap_err();
        assert!(matches!(
            err,
            EdgewayError::UnknownVertex {
                role: VertexRole::Destination,
                ..
            }
        ));
    }

    #[test]
    fn test_graph_usable_after_unknown_vertex_error() {
        let g = sample_graph();
        assert!(shortest_path(&g, &"a".to_string(), &"z".to_string()).is_err());
        let path = shortest_path(&g, &"a".to_string(), &"e".to_string()).unwrap();
        assert_eq!(path, ["a", "c", "d", "e"]);
    }

    #[test]
    fn test_mirrored_edges_route_both_ways() {
        let mut g: Graph<String> = Graph::new(Vec::new());
        g.add_edge("a".to_string(), "b".to_string(), Cost::new(1.0), true)
            .unwrap();
        g.add_edge("b".to_string(), "c".to_string(), Cost::new(2.0), true)
            .unwrap();

        let forward = g.dijkstra(&"a".to_string(), &"c".to_string()).unwrap();
        let backward = g.dijkstra(&"c".to_string(), &"a".to_string()).unwrap();
        assert_eq!(forward, ["a", "b", "c"]);
        assert_eq!(backward, ["c", "b", "a"]);
    }

    #[test]
    fn test_removing_bridge_disconnects_route() {
        let mut g = sample_graph();
        g.remove_edge(&"d".to_string(), &"e".to_string(), true);
        let path = g.dijkstra(&"a".to_string(), &"e".to_string()).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_equal_cost_routes_keep_minimal_cost() {
        // Two equally cheap a -> d routes; either is acceptable
        let edges = [
            ("a", "b", 1.0),
            ("a", "c", 1.0),
            ("b", "d", 1.0),
            ("c", "d", 1.0),
        ];
        let g: Graph<String> = Graph::new(
            edges
                .iter()
                .map(|(start, end, cost)| {
                    Edge::new(start.to_string(), end.to_string(), Cost::new(*cost))
                })
                .collect(),
        );

        let path = g.dijkstra(&"a".to_string(), &"d".to_string()).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first().map(String::as_str), Some("a"));
        assert_eq!(path.last().map(String::as_str), Some("d"));
        assert_eq!(g.path_cost(&path), Some(Cost::new(2.0)));
    }
}
