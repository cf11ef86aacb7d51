//! Partitioning errors for community-reorder

use thiserror::Error;

/// Errors from partition construction and community oracles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    /// Membership references a community index outside `[0, count)`.
    #[error("Vertex {vertex} assigned to community {community}, but only {count} communities exist")]
    CommunityOutOfRange {
        vertex: usize,
        community: usize,
        count: usize,
    },
    /// Caller-supplied community sizes disagree with the membership.
    #[error("Community sizes disagree with membership: expected {expected:?}, found {found:?}")]
    SizeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// An oracle parameter is outside its valid domain.
    #[error("Invalid oracle configuration: {0}")]
    InvalidConfig(&'static str),
}
