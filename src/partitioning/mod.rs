//! Community partitions and the oracles that produce them.
//!
//! A [`CommunityOracle`] turns a graph into a [`Partition`]: a dense
//! membership vector (`membership[v]` is the community of vertex `v`) plus the
//! number of vertices in each community. The reorder step only consumes the
//! partition; it never asks the oracle anything else.

pub mod error;
pub mod louvain;
pub mod metrics;

pub use self::error::PartitionError;
pub use self::louvain::{Louvain, LouvainConfig};
pub use self::metrics::{intra_community_edges, modularity};

use crate::graph::graph_traits::GraphSource;
use crate::graph::{CommunityId, VertexId};

/// Validated vertex-to-community assignment.
///
/// Invariants: every entry of the membership is `< community_count()`, and
/// `sizes()[c]` is the number of vertices assigned to `c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    membership: Vec<CommunityId>,
    sizes: Vec<usize>,
}

impl Partition {
    /// Partition over zero vertices and zero communities.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every vertex in `0..n` in its own community.
    pub fn singletons(n: usize) -> Self {
        Self {
            membership: (0..n).collect(),
            sizes: vec![1; n],
        }
    }

    /// Build from a membership vector, deriving community sizes.
    ///
    /// Rejects any community index outside `[0, community_count)`.
    pub fn from_membership(
        membership: Vec<CommunityId>,
        community_count: usize,
    ) -> Result<Self, PartitionError> {
        let mut sizes = vec![0usize; community_count];
        for (vertex, &community) in membership.iter().enumerate() {
            let slot = sizes
                .get_mut(community)
                .ok_or(PartitionError::CommunityOutOfRange {
                    vertex,
                    community,
                    count: community_count,
                })?;
            *slot += 1;
        }
        Ok(Self { membership, sizes })
    }

    /// Build from a membership vector and oracle-reported sizes, checking that
    /// they agree.
    pub fn from_parts(
        membership: Vec<CommunityId>,
        sizes: Vec<usize>,
    ) -> Result<Self, PartitionError> {
        let partition = Self::from_membership(membership, sizes.len())?;
        if partition.sizes != sizes {
            return Err(PartitionError::SizeMismatch {
                expected: sizes,
                found: partition.sizes,
            });
        }
        Ok(partition)
    }

    /// Community of `v`, or `None` if `v` is outside the oracle's vertex set.
    #[inline]
    pub fn community_of(&self, v: VertexId) -> Option<CommunityId> {
        self.membership.get(v).copied()
    }

    pub fn community_count(&self) -> usize {
        self.sizes.len()
    }

    /// Vertex count per community, indexed by community.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn membership(&self) -> &[CommunityId] {
        &self.membership
    }

    /// Number of vertices covered by the partition.
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// `(vertex, community)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, CommunityId)> + '_ {
        self.membership.iter().copied().enumerate()
    }
}

/// Source of community partitions.
///
/// `Graph` is whatever representation the oracle works on; the pipeline
/// builds it from the edge list through [`GraphSource`].
pub trait CommunityOracle {
    /// Oracle-native graph representation.
    type Graph: GraphSource;

    /// Partition `graph` into communities.
    fn partition(&self, graph: &Self::Graph) -> Result<Partition, PartitionError>;

    /// Optional quality score of `partition` on `graph` (e.g. modularity).
    fn quality(&self, _graph: &Self::Graph, _partition: &Partition) -> Option<f64> {
        None
    }
}

/// Oracle that returns a precomputed partition, ignoring the graph.
///
/// Used to plug in partitions computed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedPartition {
    partition: Partition,
}

impl FixedPartition {
    pub fn new(partition: Partition) -> Self {
        Self { partition }
    }
}

impl CommunityOracle for FixedPartition {
    type Graph = ();

    fn partition(&self, _graph: &()) -> Result<Partition, PartitionError> {
        Ok(self.partition.clone())
    }
}
