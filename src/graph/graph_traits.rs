// Graph trait abstraction for community detection
use super::{Edge, VertexId};
use crate::reorder_error::ReorderError;

/// Read-only undirected graph view consumed by community oracles and metrics.
///
/// Vertices are the dense range `0..vertex_count()`. Implementors must report
/// each undirected edge exactly once from [`CommunityGraph::edges`], and count a
/// self-loop twice in [`CommunityGraph::degree`].
pub trait CommunityGraph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges, multi-edges and self-loops included.
    fn edge_count(&self) -> usize;

    /// Neighbours of `v`; a self-loop lists `v` once.
    fn neighbors(&self, v: VertexId) -> &[VertexId];

    /// Degree of `v` (self-loops count twice).
    fn degree(&self, v: VertexId) -> usize;

    /// Every undirected edge once, in input order.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Sum of all degrees, `2 * edge_count()`.
    fn total_degree(&self) -> usize {
        2 * self.edge_count()
    }
}

/// Builds an oracle-native graph from parsed edge-list lines.
pub trait GraphSource: Sized {
    fn from_edge_list(edges: &[Edge]) -> Result<Self, ReorderError>;
}

/// For oracles that need no graph at all.
impl GraphSource for () {
    fn from_edge_list(_edges: &[Edge]) -> Result<Self, ReorderError> {
        Ok(())
    }
}
