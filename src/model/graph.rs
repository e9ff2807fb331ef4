use std::fmt::{Display, Formatter};

/// An index-based identifier of one edge of an [`SpdiGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn from_index(index: usize) -> EdgeId {
        EdgeId(index)
    }

    pub fn to_index(self) -> usize {
        self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A control point of one extremal map: the images of the edge's domain endpoints
/// `0` and `1`. The interpretation of control points is up to the numeric kernel;
/// the model only stores them.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint(pub f64, pub f64);

/// One edge of an SPDI graph: a one-dimensional interval domain with outgoing
/// transitions to other edges.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpdiEdge {
    /// Display name, used in diagnostics and model files only.
    pub name: String,
    /// Outgoing transitions, as indices into the owning graph.
    pub successors: Vec<EdgeId>,
    /// Control point of the lower extremal map.
    pub lower: ControlPoint,
    /// Control point of the upper extremal map.
    pub upper: ControlPoint,
}

/// The static structure of an SPDI model: an ordered collection of edges with
/// their adjacency and per-edge control data.
///
/// The graph is immutable for the lifetime of a search and is shared by reference
/// across all concurrent search branches.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpdiGraph {
    edges: Vec<SpdiEdge>,
}

impl SpdiGraph {
    /// Create a graph from its edges. Edges are identified by their position in
    /// the given vector.
    ///
    /// # Panics
    ///
    /// Panics if any successor references an edge index outside the vector.
    pub fn new(edges: Vec<SpdiEdge>) -> SpdiGraph {
        for (index, edge) in edges.iter().enumerate() {
            for successor in &edge.successors {
                assert!(
                    successor.to_index() < edges.len(),
                    "Successor {} of edge `{}` (index {}) is out of range.",
                    successor,
                    edge.name,
                    index
                );
            }
        }
        SpdiGraph { edges }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[SpdiEdge] {
        &self.edges
    }

    pub fn successors(&self, edge: EdgeId) -> &[EdgeId] {
        &self.edges[edge.to_index()].successors
    }

    pub fn name(&self, edge: EdgeId) -> &str {
        &self.edges[edge.to_index()].name
    }

    pub fn lower(&self, edge: EdgeId) -> ControlPoint {
        self.edges[edge.to_index()].lower
    }

    pub fn upper(&self, edge: EdgeId) -> ControlPoint {
        self.edges[edge.to_index()].upper
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlPoint, EdgeId, SpdiEdge, SpdiGraph};

    fn edge(name: &str, successors: Vec<usize>) -> SpdiEdge {
        SpdiEdge {
            name: name.to_string(),
            successors: successors.into_iter().map(EdgeId::from_index).collect(),
            lower: ControlPoint(0.0, 1.0),
            upper: ControlPoint(0.0, 1.0),
        }
    }

    #[test]
    fn adjacency_is_indexed_by_edge_id() {
        let graph = SpdiGraph::new(vec![edge("a", vec![1]), edge("b", vec![0, 1])]);
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.successors(EdgeId::from_index(0)), &[EdgeId::from_index(1)]);
        assert_eq!(graph.name(EdgeId::from_index(1)), "b");
    }

    #[test]
    #[should_panic]
    fn out_of_range_successor_is_rejected() {
        SpdiGraph::new(vec![edge("a", vec![3])]);
    }
}
