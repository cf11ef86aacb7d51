use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use community_reorder::algs::reorder::ReorderEngine;
use community_reorder::graph::{AdjacencyStore, CommunityGraph, UndirectedGraph};
use community_reorder::io::GraphWriter;
use community_reorder::partitioning::{CommunityOracle, Louvain, Partition};

fn edges_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..24, 0usize..24), 0..80)
}

/// Random membership over `0..n` using `k` communities.
fn random_partition(n: usize, k: usize, seed: u64) -> Partition {
    let mut rng = SmallRng::seed_from_u64(seed);
    let membership = (0..n).map(|_| rng.gen_range(0..k)).collect();
    Partition::from_membership(membership, k).unwrap()
}

proptest! {
    #[test]
    fn prop_orderings_are_non_decreasing(
        edges in edges_strategy(),
        n in 0usize..30,
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let store = AdjacencyStore::from_edges(edges.iter().copied());
        let partition = random_partition(n, k, seed);
        let ordered = ReorderEngine::new().reorder(&store, &partition);

        prop_assert_eq!(ordered.community_count(), k);
        let sizes: Vec<usize> = ordered.blocks().iter().map(|b| b.len()).collect();
        prop_assert!(sizes.windows(2).all(|w| w[0] <= w[1]), "block sizes {:?}", sizes);
        for block in ordered.blocks() {
            let degrees: Vec<usize> = block.entries().iter().map(|e| e.out_degree()).collect();
            prop_assert!(degrees.windows(2).all(|w| w[0] <= w[1]), "degrees {:?}", degrees);
        }
    }

    #[test]
    fn prop_every_vertex_in_exactly_one_block(
        edges in edges_strategy(),
        n in 0usize..30,
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let store = AdjacencyStore::from_edges(edges.iter().copied());
        let partition = random_partition(n, k, seed);
        let ordered = ReorderEngine::new().reorder(&store, &partition);

        let emitted: Vec<usize> = ordered.vertex_order().collect();
        let unique: BTreeSet<usize> = emitted.iter().copied().collect();
        prop_assert_eq!(unique.len(), emitted.len());

        let expected: BTreeSet<usize> = store
            .sorted_sources()
            .into_iter()
            .filter(|&v| partition.community_of(v).is_some())
            .collect();
        prop_assert_eq!(unique, expected);

        for block in ordered.blocks() {
            for entry in block.entries() {
                prop_assert_eq!(partition.community_of(entry.vertex), Some(block.community()));
                prop_assert_eq!(Some(entry.neighbors), store.neighbors_of(entry.vertex));
            }
        }
    }

    #[test]
    fn prop_written_list_round_trips(
        edges in edges_strategy(),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let store = AdjacencyStore::from_edges(edges.iter().copied());
        // cover every id so no source is dropped
        let partition = random_partition(24, k, seed);
        let ordered = ReorderEngine::new().reorder(&store, &partition);

        let mut buf = Vec::new();
        let lines = GraphWriter::new().write(&ordered, &mut buf).unwrap();
        prop_assert_eq!(lines, edges.len());

        let reread = AdjacencyStore::from_reader(buf.as_slice()).unwrap();
        prop_assert_eq!(reread, store);
    }

    #[test]
    fn prop_louvain_membership_is_total_and_dense(edges in edges_strategy()) {
        let graph = UndirectedGraph::from_edges(&edges).unwrap();
        let partition = Louvain::new().partition(&graph).unwrap();
        prop_assert_eq!(partition.len(), graph.vertex_count());
        let used: BTreeMap<usize, usize> = partition
            .membership()
            .iter()
            .fold(BTreeMap::new(), |mut acc, &c| {
                *acc.entry(c).or_insert(0) += 1;
                acc
            });
        prop_assert_eq!(used.len(), partition.community_count());
        prop_assert!(partition.sizes().iter().all(|&s| s > 0));
        if graph.edge_count() > 0 {
            let q = Louvain::new().quality(&graph, &partition).unwrap();
            prop_assert!(q >= -0.5 - 1e-9 && q <= 1.0 + 1e-9, "q = {}", q);
        }
    }
}
