//! ReorderError: unified error type for community-reorder public APIs
//!
//! Every fallible operation in the crate surfaces one of these variants to the
//! caller; nothing is retried or swallowed.

use crate::partitioning::error::PartitionError;
use thiserror::Error;

/// Unified error type for reordering operations.
#[derive(Debug, Error)]
pub enum ReorderError {
    /// An edge-list line did not parse into exactly two vertex ids.
    #[error("Input format error on line {line}: {reason} (`{content}`)")]
    InputFormat {
        /// 1-based line number in the source.
        line: usize,
        /// The offending line, verbatim.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A vertex id is too large to index the oracle's dense vertex range.
    #[error("Vertex id {vertex} exceeds the largest supported id {limit}")]
    VertexIdTooLarge { vertex: usize, limit: usize },
    /// Memory for the oracle's graph could not be reserved.
    #[error("Cannot allocate graph storage: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
    /// The partition handed to the reorder step was inconsistent, or the oracle failed.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

/// Result alias for community-reorder.
pub type Result<T> = std::result::Result<T, ReorderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_format_message_names_line() {
        let err = ReorderError::InputFormat {
            line: 3,
            content: "abc def".into(),
            reason: "vertex id is not a non-negative integer",
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"), "{msg}");
        assert!(msg.contains("abc def"), "{msg}");
    }

    #[test]
    fn vertex_id_message_names_limit() {
        let err = ReorderError::VertexIdTooLarge {
            vertex: usize::MAX,
            limit: 7,
        };
        assert_eq!(
            err.to_string(),
            format!("Vertex id {} exceeds the largest supported id 7", usize::MAX)
        );
    }

    #[test]
    fn partition_error_is_transparent() {
        let err: ReorderError = PartitionError::CommunityOutOfRange {
            vertex: 4,
            community: 9,
            count: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Vertex 4 assigned to community 9, but only 2 communities exist"
        );
    }
}
