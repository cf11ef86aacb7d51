//! Source-keyed adjacency built by streaming an edge list.

use super::{Edge, VertexId};
use crate::io::edge_list::EdgeListReader;
use crate::reorder_error::ReorderError;
use hashbrown::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Mapping from source vertex to its neighbours, in edge-insertion order.
///
/// Edges are stored in the direction they were read: `insert_edge(u, v)`
/// records `v` under `u` and never creates an entry for `v`. Duplicate edges
/// and self-loops are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyStore {
    adjacency: HashMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl AdjacencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-parsed edges.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut store = Self::new();
        for (u, v) in edges {
            store.insert_edge(u, v);
        }
        store
    }

    /// Stream an edge list into a fresh store.
    ///
    /// The first malformed line aborts construction; no partial store is
    /// returned.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReorderError> {
        let mut store = Self::new();
        EdgeListReader::for_each_edge(reader, |u, v| store.insert_edge(u, v))?;
        Ok(store)
    }

    /// Open `path`, stream it into a store and close it again.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReorderError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Append `v` to `u`'s neighbour list, creating the entry for `u` if absent.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency.entry(u).or_default().push(v);
        self.edge_count += 1;
    }

    /// Neighbours of `u` in insertion order, or `None` if `u` was never a source.
    #[inline]
    pub fn neighbors_of(&self, u: VertexId) -> Option<&[VertexId]> {
        self.adjacency.get(&u).map(Vec::as_slice)
    }

    /// Number of recorded neighbours of `u` (0 if `u` was never a source).
    #[inline]
    pub fn out_degree(&self, u: VertexId) -> usize {
        self.adjacency.get(&u).map_or(0, Vec::len)
    }

    /// Number of distinct source vertices.
    pub fn source_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges inserted.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Source vertices in ascending id order.
    pub fn sorted_sources(&self) -> Vec<VertexId> {
        let mut sources: Vec<VertexId> = self.adjacency.keys().copied().collect();
        sources.sort_unstable();
        sources
    }
}
