use ordered_float::OrderedFloat;
use serde::Serialize;

/// Cost of traversing a single directed edge.
///
/// Wraps `OrderedFloat` so costs are hashable and totally ordered, which
/// lets adjacency sets hold `(vertex, cost)` pairs and lets minimum
/// selection compare tentative distances directly. Costs are expected to
/// be non-negative; negative values are not rejected here but break
/// shortest-path correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// Cost of an edge created without an explicit weight
    pub const DEFAULT: Cost = Cost(OrderedFloat(1.0));

    /// Additive identity for accumulating path costs
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// Sentinel for "no known route yet" during minimum selection
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::INFINITY));

    pub fn new(value: f64) -> Self {
        Cost(OrderedFloat(value))
    }

    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted connection between two vertices.
///
/// An edge `(a, b, c)` permits traversal from `a` to `b` only; the
/// reverse direction needs its own mirror edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V> {
    pub start: V,
    pub end: V,
    pub cost: Cost,
}

impl<V> Edge<V> {
    pub fn new(start: V, end: V, cost: Cost) -> Self {
        Edge { start, end, cost }
    }

    /// Edge with the default cost of 1
    pub fn unit(start: V, end: V) -> Self {
        Edge::new(start, end, Cost::DEFAULT)
    }
}
