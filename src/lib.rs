#![cfg_attr(docsrs, feature(doc_cfg))]
//! # community-reorder
//!
//! community-reorder rewrites an undirected edge list so that vertices of the
//! same community are emitted next to each other. Traversal and clustering
//! algorithms run over the rewritten list then touch memory in a more local
//! pattern.
//!
//! ## Pipeline
//! - [`graph::AdjacencyStore`]: source vertex → neighbours, in file order
//! - [`partitioning::CommunityOracle`]: pluggable community detection
//!   ([`partitioning::Louvain`] built in, [`partitioning::FixedPartition`] for
//!   partitions computed elsewhere)
//! - [`algs::reorder::ReorderEngine`]: communities by ascending size, vertices
//!   by ascending out-degree
//! - [`io::GraphWriter`]: writes the result back as an edge list
//! - [`pipeline::ReorderPipeline`]: all of the above, file to file
//!
//! ## Determinism
//!
//! Both sorts are stable, so equal-sized communities keep their community
//! index order and equal-degree vertices keep ascending vertex id. The Louvain
//! oracle draws its optional shuffle from a `SmallRng` seeded by its
//! configuration, so runs are reproducible.
//!
//! ## Usage
//! ```no_run
//! use community_reorder::prelude::*;
//!
//! let summary = ReorderPipeline::new(Louvain::new())
//!     .run("graph.txt", "graph.reordered.txt")?;
//! println!("{} communities", summary.communities);
//! # Ok::<(), community_reorder::ReorderError>(())
//! ```
//!
//! ## Logging
//! Progress is reported through the `log` facade; install any logger to see it.

pub mod algs;
pub mod graph;
pub mod instrument;
pub mod io;
pub mod partitioning;
pub mod pipeline;
pub mod reorder_error;

pub use reorder_error::{ReorderError, Result};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::reorder::{CommunityOrderedAdjacency, ReorderEngine};
    pub use crate::graph::{
        AdjacencyStore, CommunityGraph, CommunityId, Edge, GraphSource, UndirectedGraph, VertexId,
    };
    pub use crate::instrument::{LogTimer, NoopTimer, RecordingTimer, Stage, StageTimer};
    pub use crate::io::{EdgeListReader, GraphWriter, Labels, WriterConfig};
    pub use crate::partitioning::{
        CommunityOracle, FixedPartition, Louvain, LouvainConfig, Partition, PartitionError,
    };
    pub use crate::pipeline::{ReorderPipeline, ReorderSummary};
    pub use crate::reorder_error::ReorderError;
}
