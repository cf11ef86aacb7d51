//! Partition quality metrics.
//!
//! These evaluate a [`Partition`] against the undirected graph it was computed
//! on. They do not validate the oracle; they only measure what it returned.

use crate::graph::graph_traits::CommunityGraph;
use crate::partitioning::Partition;

/// Number of edges whose endpoints share a community.
///
/// Edges touching a vertex outside the partition are not counted.
pub fn intra_community_edges<G>(g: &G, partition: &Partition) -> usize
where
    G: CommunityGraph,
{
    g.edges()
        .filter(|&(u, v)| match (partition.community_of(u), partition.community_of(v)) {
            (Some(cu), Some(cv)) => cu == cv,
            _ => false,
        })
        .count()
}

/// Newman modularity of `partition` with resolution `gamma`:
///
/// `Q = Σ_c [ L_c / m - γ (D_c / 2m)^2 ]`
///
/// where `m` is the number of edges, `L_c` the number of edges inside `c`
/// (self-loops included once) and `D_c` the degree sum of `c`.
///
/// Returns `None` if the graph has no edges or the partition does not cover
/// every vertex of the graph.
pub fn modularity<G>(g: &G, partition: &Partition, gamma: f64) -> Option<f64>
where
    G: CommunityGraph,
{
    let m = g.edge_count();
    if m == 0 || partition.len() < g.vertex_count() {
        return None;
    }
    let k = partition.community_count();
    let mut inner = vec![0u64; k];
    let mut volume = vec![0u64; k];

    for v in 0..g.vertex_count() {
        let c = partition.community_of(v)?;
        volume[c] += g.degree(v) as u64;
    }
    for (u, v) in g.edges() {
        let cu = partition.community_of(u)?;
        if Some(cu) == partition.community_of(v) {
            inner[cu] += 1;
        }
    }

    let m = m as f64;
    let q = inner
        .iter()
        .zip(&volume)
        .map(|(&l, &d)| {
            let a = d as f64 / (2.0 * m);
            l as f64 / m - gamma * a * a
        })
        .sum();
    Some(q)
}
