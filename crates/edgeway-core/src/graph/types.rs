use serde::Serialize;

/// Result of a shortest-path query
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
    /// Number of edges traversed
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// One outgoing edge in a neighbour listing
#[derive(Debug, Clone, Serialize)]
pub struct NeighbourEntry {
    pub to: String,
    pub cost: f64,
}
