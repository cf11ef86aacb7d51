//! Edge-list reader and community-ordered writer.
//!
//! # Format
//! - One edge per line: `u v`, both non-negative integers.
//! - Tokens are separated by whitespace; exactly two tokens per line.
//! - Blank lines count as malformed.
//!
//! # Limitations
//! - Weights, comments and headers are not supported.

use crate::algs::reorder::CommunityOrderedAdjacency;
use crate::graph::{Edge, VertexId};
use crate::reorder_error::ReorderError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Streaming parser for the edge-list format.
#[derive(Debug, Default, Clone)]
pub struct EdgeListReader;

impl EdgeListReader {
    fn parse_vertex(line_no: usize, line: &str, raw: &str) -> Result<VertexId, ReorderError> {
        raw.parse::<VertexId>()
            .map_err(|_| ReorderError::InputFormat {
                line: line_no,
                content: line.to_string(),
                reason: "vertex id is not a non-negative integer",
            })
    }

    /// Parse one line (`line_no` is 1-based, used for error reporting).
    pub fn parse_line(line_no: usize, line: &str) -> Result<Edge, ReorderError> {
        let mut parts = line.split_whitespace();
        let (Some(u), Some(v), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ReorderError::InputFormat {
                line: line_no,
                content: line.to_string(),
                reason: "expected exactly two whitespace-separated vertex ids",
            });
        };
        Ok((
            Self::parse_vertex(line_no, line, u)?,
            Self::parse_vertex(line_no, line, v)?,
        ))
    }

    /// Feed every edge of `reader` to `f` in file order.
    ///
    /// Stops at the first malformed line. Returns the number of edges seen.
    pub fn for_each_edge<R, F>(reader: R, mut f: F) -> Result<usize, ReorderError>
    where
        R: BufRead,
        F: FnMut(VertexId, VertexId),
    {
        let mut count = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let (u, v) = Self::parse_line(idx + 1, &line)?;
            f(u, v);
            count += 1;
        }
        Ok(count)
    }

    /// Collect all edges of `reader`.
    pub fn read<R: BufRead>(reader: R) -> Result<Vec<Edge>, ReorderError> {
        let mut edges = Vec::new();
        Self::for_each_edge(reader, |u, v| edges.push((u, v)))?;
        Ok(edges)
    }

    /// Read all edges from the file at `path`.
    pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<Edge>, ReorderError> {
        let file = File::open(path)?;
        Self::read(BufReader::new(file))
    }
}

/// Which identifiers the writer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Labels {
    /// Emit the input vertex ids unchanged, in community order.
    #[default]
    Original,
    /// Emit contiguous ids assigned in emission order
    /// (see [`CommunityOrderedAdjacency::relabeling`]).
    Contiguous,
}

/// Writer options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    pub labels: Labels,
}

/// Serializes a [`CommunityOrderedAdjacency`] back to the edge-list format.
///
/// Lines follow the exact iteration order of the ordered adjacency: blocks,
/// then vertices within a block, then each neighbour list.
#[derive(Debug, Clone, Default)]
pub struct GraphWriter {
    config: WriterConfig,
}

impl GraphWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.config.labels = labels;
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Write every edge to `writer`, returning the number of lines written.
    pub fn write<W: Write>(
        &self,
        ordered: &CommunityOrderedAdjacency<'_>,
        mut writer: W,
    ) -> Result<usize, ReorderError> {
        let mut lines = 0;
        match self.config.labels {
            Labels::Original => {
                for (u, v) in ordered.edges() {
                    writeln!(writer, "{u} {v}")?;
                    lines += 1;
                }
            }
            Labels::Contiguous => {
                let relabel = ordered.relabeling();
                let label = |x: VertexId| relabel.get(&x).copied().unwrap_or(x);
                for (u, v) in ordered.edges() {
                    writeln!(writer, "{} {}", label(u), label(v))?;
                    lines += 1;
                }
            }
        }
        writer.flush()?;
        Ok(lines)
    }

    /// Create (or truncate) the file at `path` and write every edge to it.
    pub fn save<P: AsRef<Path>>(
        &self,
        ordered: &CommunityOrderedAdjacency<'_>,
        path: P,
    ) -> Result<usize, ReorderError> {
        let file = File::create(path)?;
        self.write(ordered, BufWriter::new(file))
    }
}
