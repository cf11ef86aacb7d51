//! Graph representations built from edge lists.
//!
//! - [`adjacency::AdjacencyStore`] keeps each source vertex's neighbour list in
//!   file order, direction-sensitive, duplicates and self-loops included.
//! - [`undirected::UndirectedGraph`] is the CSR form handed to community oracles.
//! - [`graph_traits::CommunityGraph`] is the read-only view oracles and metrics use.

pub mod adjacency;
pub mod graph_traits;
pub mod undirected;

pub use adjacency::AdjacencyStore;
pub use graph_traits::{CommunityGraph, GraphSource};
pub use undirected::UndirectedGraph;

/// Vertex identifier as it appears in the input edge list.
pub type VertexId = usize;

/// Dense community index in `[0, community_count)`.
pub type CommunityId = usize;

/// One `(source, destination)` line of an edge list.
pub type Edge = (VertexId, VertexId);
