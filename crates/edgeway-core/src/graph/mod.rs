//! Weighted directed graph backed by a flat edge list.
//!
//! Vertex and adjacency views are derived from the edge list on every
//! call rather than cached, so mutation needs no invalidation step.

pub mod dijkstra;
pub mod edge;
pub mod parse;
pub mod types;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{EdgewayError, Result};

pub use dijkstra::shortest_path;
pub use edge::{Cost, Edge};
pub use parse::{parse_edge_list, render_edge_list};
pub use types::{NeighbourEntry, RouteResult};

/// Directed weighted graph over an opaque vertex type.
///
/// The CLI instantiates `V = String`; any hashable, displayable vertex
/// identifier works.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    edges: Vec<Edge<V>>,
}

impl<V> Graph<V>
where
    V: Clone + Eq + Hash + fmt::Display,
{
    /// Build a graph from an existing edge list.
    ///
    /// Performs no deduplication and no cost validation; `add_edge` is
    /// the mutator that enforces uniqueness of directed pairs.
    pub fn new(edges: Vec<Edge<V>>) -> Self {
        Graph { edges }
    }

    /// The edges in insertion order
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Every distinct endpoint appearing in any edge. Recomputed per call.
    pub fn vertices(&self) -> HashSet<V> {
        let mut vertices = HashSet::new();
        for edge in &self.edges {
            vertices.insert(edge.start.clone());
            vertices.insert(edge.end.clone());
        }
        vertices
    }

    /// Adjacency view: each vertex mapped to the `(end, cost)` pairs of
    /// its outgoing edges.
    ///
    /// The domain is the full vertex set; a vertex with no outgoing
    /// edges maps to an empty set. Recomputed per call.
    pub fn neighbours(&self) -> HashMap<V, HashSet<(V, Cost)>> {
        let mut neighbours: HashMap<V, HashSet<(V, Cost)>> = self
            .vertices()
            .into_iter()
            .map(|vertex| (vertex, HashSet::new()))
            .collect();

        for edge in &self.edges {
            if let Some(adjacent) = neighbours.get_mut(&edge.start) {
                adjacent.insert((edge.end.clone(), edge.cost));
            }
        }

        neighbours
    }

    /// The ordered endpoint pair(s) a mutation treats symmetrically:
    /// both directions when `both_ends`, otherwise only `n1 -> n2`.
    pub fn node_pairs(n1: &V, n2: &V, both_ends: bool) -> Vec<(V, V)> {
        if both_ends {
            vec![(n1.clone(), n2.clone()), (n2.clone(), n1.clone())]
        } else {
            vec![(n1.clone(), n2.clone())]
        }
    }

    /// Insert the edge `n1 -> n2` and, when `both_ends`, the mirror
    /// `n2 -> n1` at the same cost.
    ///
    /// Fails with `DuplicateEdge` and performs no mutation if any
    /// existing edge already matches one of the affected pairs.
    pub fn add_edge(&mut self, n1: V, n2: V, cost: Cost, both_ends: bool) -> Result<()> {
        let pairs = Self::node_pairs(&n1, &n2, both_ends);
        let duplicate = self.edges.iter().any(|edge| {
            pairs
                .iter()
                .any(|(start, end)| edge.start == *start && edge.end == *end)
        });
        if duplicate {
            return Err(EdgewayError::DuplicateEdge {
                from: n1.to_string(),
                to: n2.to_string(),
            });
        }

        self.edges.push(Edge::new(n1.clone(), n2.clone(), cost));
        if both_ends {
            self.edges.push(Edge::new(n2, n1, cost));
        }
        Ok(())
    }

    /// Remove every edge matching the affected pair(s).
    ///
    /// Removing a non-existent edge is a no-op, so removal is
    /// idempotent.
    pub fn remove_edge(&mut self, n1: &V, n2: &V, both_ends: bool) {
        let pairs = Self::node_pairs(n1, n2, both_ends);
        self.edges.retain(|edge| {
            !pairs
                .iter()
                .any(|(start, end)| edge.start == *start && edge.end == *end)
        });
    }

    /// Total cost of walking a vertex sequence, taking the cheapest edge
    /// for each consecutive pair.
    ///
    /// Returns `None` if some hop has no edge. Sequences shorter than
    /// two vertices cost zero.
    pub fn path_cost(&self, path: &[V]) -> Option<Cost> {
        let mut total = Cost::ZERO;
        for pair in path.windows(2) {
            let hop = self
                .edges
                .iter()
                .filter(|edge| edge.start == pair[0] && edge.end == pair[1])
                .map(|edge| edge.cost)
                .min()?;
            total = total + hop;
        }
        Some(total)
    }

    /// Shortest path from `source` to `dest`, see [`shortest_path`].
    pub fn dijkstra(&self, source: &V, dest: &V) -> Result<Vec<V>> {
        shortest_path(self, source, dest)
    }
}
