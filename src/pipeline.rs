//! End-to-end reordering: edge list in, community-ordered edge list out.
//!
//! Stages run strictly one after another:
//! 1. **Load**: read the edge list once, build the [`AdjacencyStore`] and the
//!    oracle's graph from the same edges. The input handle is closed here.
//! 2. **Partition**: ask the [`CommunityOracle`] for a partition.
//! 3. **Reorder**: build the [`CommunityOrderedAdjacency`].
//! 4. **Save**: write it out. Nothing is written if an earlier stage failed.

use crate::algs::reorder::{CommunityOrderedAdjacency, ReorderEngine};
use crate::graph::graph_traits::GraphSource;
use crate::graph::{AdjacencyStore, Edge};
use crate::instrument::{LogTimer, Stage, StageTimer, timed};
use crate::io::edge_list::{EdgeListReader, GraphWriter};
use crate::partitioning::CommunityOracle;
use crate::reorder_error::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

/// What a pipeline run produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReorderSummary {
    /// Source vertices emitted.
    pub vertices: usize,
    /// Edge lines written.
    pub edges: usize,
    /// Communities reported by the oracle, empty ones included.
    pub communities: usize,
    /// Oracle quality score, if the oracle provides one.
    pub modularity: Option<f64>,
}

/// Load → partition → reorder → save, with each stage reported to a timer.
#[derive(Debug, Clone)]
pub struct ReorderPipeline<O, T = LogTimer> {
    oracle: O,
    engine: ReorderEngine,
    writer: GraphWriter,
    timer: T,
}

impl<O: CommunityOracle> ReorderPipeline<O, LogTimer> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            engine: ReorderEngine::new(),
            writer: GraphWriter::new(),
            timer: LogTimer,
        }
    }
}

impl<O, T> ReorderPipeline<O, T>
where
    O: CommunityOracle,
    T: StageTimer,
{
    /// Replace the stage timer.
    pub fn with_timer<U: StageTimer>(self, timer: U) -> ReorderPipeline<O, U> {
        ReorderPipeline {
            oracle: self.oracle,
            engine: self.engine,
            writer: self.writer,
            timer,
        }
    }

    pub fn with_writer(mut self, writer: GraphWriter) -> Self {
        self.writer = writer;
        self
    }

    /// Read `input` into both graph representations.
    pub fn load<P: AsRef<Path>>(&self, input: P) -> Result<(AdjacencyStore, O::Graph)> {
        self.load_with(|| EdgeListReader::read_path(input))
    }

    /// Reorder the edge list at `input` and write the result to `output`.
    ///
    /// `output` is created or truncated only after every earlier stage succeeded.
    pub fn run<P, Q>(&self, input: P, output: Q) -> Result<ReorderSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let (store, graph) = self.load(input)?;
        self.process(&store, &graph, |ordered| self.writer.save(ordered, output))
    }

    /// Same as [`run`](Self::run) over an in-memory reader and writer.
    pub fn run_with<R, W>(&self, reader: R, writer: W) -> Result<ReorderSummary>
    where
        R: BufRead,
        W: Write,
    {
        let (store, graph) = self.load_with(|| EdgeListReader::read(reader))?;
        self.process(&store, &graph, |ordered| self.writer.write(ordered, writer))
    }

    fn load_with<F>(&self, read: F) -> Result<(AdjacencyStore, O::Graph)>
    where
        F: FnOnce() -> Result<Vec<Edge>>,
    {
        timed(&self.timer, Stage::Load, || -> Result<(AdjacencyStore, O::Graph)> {
            let edges = read()?;
            let store = AdjacencyStore::from_edges(edges.iter().copied());
            let graph = <O::Graph as GraphSource>::from_edge_list(&edges)?;
            log::debug!(
                "loaded {} edges from {} source vertices",
                store.edge_count(),
                store.source_count()
            );
            Ok((store, graph))
        })
    }

    fn process<F>(
        &self,
        store: &AdjacencyStore,
        graph: &O::Graph,
        save: F,
    ) -> Result<ReorderSummary>
    where
        F: FnOnce(&CommunityOrderedAdjacency<'_>) -> Result<usize>,
    {
        let partition = timed(&self.timer, Stage::Partition, || self.oracle.partition(graph))?;
        let modularity = self.oracle.quality(graph, &partition);
        log::info!(
            "{} communities over {} vertices (modularity {:?})",
            partition.community_count(),
            partition.len(),
            modularity
        );

        let ordered = timed(&self.timer, Stage::Reorder, || {
            self.engine.reorder(store, &partition)
        });
        let edges = timed(&self.timer, Stage::Save, || save(&ordered))?;

        Ok(ReorderSummary {
            vertices: ordered.vertex_count(),
            edges,
            communities: partition.community_count(),
            modularity,
        })
    }
}
