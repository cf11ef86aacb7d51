//! Community-ordered adjacency: group source vertices by community, then order
//! communities by size and vertices by out-degree.
//!
//! Ordering rules:
//! - Communities ascend by the number of vertices placed in them (empty
//!   communities come first).
//! - Inside a community, vertices ascend by neighbour-list length.
//! - Both sorts are stable. Equal-sized communities keep ascending community
//!   index; equal-degree vertices keep ascending vertex id.

use crate::graph::{AdjacencyStore, CommunityId, Edge, VertexId};
use crate::partitioning::Partition;
use hashbrown::HashMap;

/// One source vertex and its neighbour list, borrowed from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexEntry<'a> {
    pub vertex: VertexId,
    pub neighbors: &'a [VertexId],
}

impl VertexEntry<'_> {
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// The vertices of one community, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityBlock<'a> {
    community: CommunityId,
    entries: Vec<VertexEntry<'a>>,
}

impl<'a> CommunityBlock<'a> {
    /// Community index as assigned by the oracle.
    pub fn community(&self) -> CommunityId {
        self.community
    }

    pub fn entries(&self) -> &[VertexEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only two-level ordering produced by [`ReorderEngine::reorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityOrderedAdjacency<'a> {
    blocks: Vec<CommunityBlock<'a>>,
}

impl<'a> CommunityOrderedAdjacency<'a> {
    /// Community blocks in emission order.
    pub fn blocks(&self) -> &[CommunityBlock<'a>] {
        &self.blocks
    }

    /// Number of blocks, empty ones included.
    pub fn community_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of source vertices placed in some block.
    pub fn vertex_count(&self) -> usize {
        self.blocks.iter().map(CommunityBlock::len).sum()
    }

    pub fn edge_count(&self) -> usize {
        self.entries().map(|e| e.neighbors.len()).sum()
    }

    /// True if no vertex was placed.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(CommunityBlock::is_empty)
    }

    /// All entries, block by block.
    pub fn entries(&self) -> impl Iterator<Item = &VertexEntry<'a>> + '_ {
        self.blocks.iter().flat_map(|b| b.entries.iter())
    }

    /// Source vertices in emission order.
    pub fn vertex_order(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries().map(|e| e.vertex)
    }

    /// Every `(source, neighbour)` pair in emission order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.entries()
            .flat_map(|e| e.neighbors.iter().map(move |&v| (e.vertex, v)))
    }

    /// Contiguous new id for every vertex that appears in the output.
    ///
    /// Sources get `0..vertex_count()` in emission order. Vertices that only
    /// appear as neighbours follow, numbered by first appearance in
    /// [`edges`](Self::edges).
    pub fn relabeling(&self) -> HashMap<VertexId, VertexId> {
        let mut labels: HashMap<VertexId, VertexId> = HashMap::with_capacity(self.vertex_count());
        for v in self.vertex_order() {
            let next = labels.len();
            labels.insert(v, next);
        }
        for (_, v) in self.edges() {
            let next = labels.len();
            labels.entry(v).or_insert(next);
        }
        labels
    }
}

/// Builds a [`CommunityOrderedAdjacency`] from an adjacency store and a partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReorderEngine;

impl ReorderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Group the store's source vertices by community and order them.
    ///
    /// Sources missing from the partition and partition vertices that were
    /// never a source are left out. Every community of the partition yields a
    /// block, even if it ends up empty.
    pub fn reorder<'a>(
        &self,
        store: &'a AdjacencyStore,
        partition: &Partition,
    ) -> CommunityOrderedAdjacency<'a> {
        let mut blocks: Vec<CommunityBlock<'a>> = partition
            .sizes()
            .iter()
            .enumerate()
            .map(|(community, &size)| CommunityBlock {
                community,
                entries: Vec::with_capacity(size),
            })
            .collect();

        let mut placed = 0usize;
        for (vertex, community) in partition.iter() {
            if let Some(neighbors) = store.neighbors_of(vertex) {
                blocks[community].entries.push(VertexEntry { vertex, neighbors });
                placed += 1;
            }
        }
        let skipped = store.source_count() - placed;
        if skipped > 0 {
            log::warn!("{skipped} source vertices have no community and were left out");
        }
        log::debug!(
            "placed {placed} vertices into {} communities",
            blocks.len()
        );

        blocks.sort_by_key(CommunityBlock::len);
        for block in &mut blocks {
            block.entries.sort_by_key(VertexEntry::out_degree);
        }
        CommunityOrderedAdjacency { blocks }
    }
}
