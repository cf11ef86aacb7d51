//! Algorithms over loaded graphs.

pub mod reorder;

pub use reorder::{CommunityBlock, CommunityOrderedAdjacency, ReorderEngine, VertexEntry};
