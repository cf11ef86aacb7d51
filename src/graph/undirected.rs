//! CSR undirected graph loaded from an edge list.
//!
//! This is the representation community oracles consume. Unlike
//! [`AdjacencyStore`](super::AdjacencyStore) it is symmetric: every input line
//! `u v` makes `u` and `v` neighbours of each other.
//!
//! Vertex set: `0..=max_id` over all ids in the list. Ids that never appear are
//! isolated vertices, so vertex numbering lines up with the input ids. Ids
//! above [`MAX_VERTEX_ID`] are rejected rather than allocated for.

use super::graph_traits::{CommunityGraph, GraphSource};
use super::{Edge, VertexId};
use crate::io::edge_list::EdgeListReader;
use crate::reorder_error::ReorderError;
use std::io::BufRead;
use std::path::Path;

/// Largest vertex id the dense vertex range accepts.
pub const MAX_VERTEX_ID: VertexId = u32::MAX as VertexId - 1;

/// CSR-style undirected multigraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    /// CSR offsets into `adjncy` for each vertex.
    xadj: Vec<usize>,
    /// Concatenated neighbour lists.
    adjncy: Vec<VertexId>,
    /// Degree per vertex, self-loops counted twice.
    degrees: Vec<usize>,
    /// Input edges, one entry per line.
    edges: Vec<Edge>,
}

impl UndirectedGraph {
    /// Build from edges; neighbour lists follow input order.
    ///
    /// Fails with [`ReorderError::VertexIdTooLarge`] if an id exceeds
    /// [`MAX_VERTEX_ID`], or [`ReorderError::Allocation`] if the vertex arrays
    /// cannot be reserved.
    pub fn from_edges(edges: &[Edge]) -> Result<Self, ReorderError> {
        let max_id = edges.iter().map(|&(u, v)| u.max(v)).max();
        let n = match max_id {
            None => 0,
            Some(id) if id > MAX_VERTEX_ID => {
                return Err(ReorderError::VertexIdTooLarge {
                    vertex: id,
                    limit: MAX_VERTEX_ID,
                });
            }
            Some(id) => id.checked_add(1).ok_or(ReorderError::VertexIdTooLarge {
                vertex: id,
                limit: MAX_VERTEX_ID,
            })?,
        };

        let mut counts = zeroed(n)?;
        let mut degrees = zeroed(n)?;
        for &(u, v) in edges {
            counts[u] += 1;
            degrees[u] += 1;
            degrees[v] += 1;
            if u != v {
                counts[v] += 1;
            }
        }

        let mut xadj = Vec::new();
        xadj.try_reserve_exact(n + 1)?;
        xadj.push(0);
        for c in &counts {
            let last = xadj[xadj.len() - 1];
            xadj.push(last + c);
        }

        let mut cursor: Vec<usize> = xadj[..n].to_vec();
        let mut adjncy = zeroed(xadj[n])?;
        for &(u, v) in edges {
            adjncy[cursor[u]] = v;
            cursor[u] += 1;
            if u != v {
                adjncy[cursor[v]] = u;
                cursor[v] += 1;
            }
        }

        Ok(Self {
            xadj,
            adjncy,
            degrees,
            edges: edges.to_vec(),
        })
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReorderError> {
        let edges = EdgeListReader::read(reader)?;
        Self::from_edges(&edges)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReorderError> {
        let edges = EdgeListReader::read_path(path)?;
        Self::from_edges(&edges)
    }
}

fn zeroed(len: usize) -> Result<Vec<usize>, ReorderError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, 0);
    Ok(v)
}

impl GraphSource for UndirectedGraph {
    fn from_edge_list(edges: &[Edge]) -> Result<Self, ReorderError> {
        Self::from_edges(edges)
    }
}

impl CommunityGraph for UndirectedGraph {
    fn vertex_count(&self) -> usize {
        self.degrees.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjncy[self.xadj[v]..self.xadj[v + 1]]
    }

    #[inline]
    fn degree(&self, v: VertexId) -> usize {
        self.degrees[v]
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }
}
