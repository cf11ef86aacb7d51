use std::collections::BTreeSet;
use std::fs;

use community_reorder::algs::reorder::ReorderEngine;
use community_reorder::graph::AdjacencyStore;
use community_reorder::instrument::{NoopTimer, RecordingTimer, Stage};
use community_reorder::io::{GraphWriter, Labels};
use community_reorder::partitioning::{FixedPartition, Louvain, Partition};
use community_reorder::pipeline::ReorderPipeline;
use community_reorder::ReorderError;

fn store(text: &str) -> AdjacencyStore {
    AdjacencyStore::from_reader(text.as_bytes()).unwrap()
}

fn write_to_string(store: &AdjacencyStore, partition: &Partition) -> String {
    let ordered = ReorderEngine::new().reorder(store, partition);
    let mut buf = Vec::new();
    GraphWriter::new().write(&ordered, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn neighbors_follow_file_order() {
    let s = store("4 1\n4 7\n1 4\n4 1\n");
    assert_eq!(s.neighbors_of(4), Some(&[1, 7, 1][..]));
    assert_eq!(s.neighbors_of(1), Some(&[4][..]));
    assert_eq!(s.neighbors_of(7), None);
}

#[test]
fn scenario_a_single_community_triangle() {
    let s = store("0 1\n1 2\n2 0\n");
    let p = Partition::from_membership(vec![0, 0, 0], 1).unwrap();
    let ordered = ReorderEngine::new().reorder(&s, &p);

    assert_eq!(ordered.community_count(), 1);
    let block = &ordered.blocks()[0];
    assert_eq!(block.len(), 3);
    let entries: Vec<_> = block
        .entries()
        .iter()
        .map(|e| (e.vertex, e.neighbors.to_vec()))
        .collect();
    assert_eq!(entries, vec![(0, vec![1]), (1, vec![2]), (2, vec![0])]);
}

#[test]
fn scenario_b_smaller_community_emitted_first() {
    // community 0 holds the high ids {5, 6, 7}, community 1 the lone vertex 0
    let s = store("0 5\n5 6\n6 7\n7 5\n");
    let mut membership = vec![0; 8];
    membership[0] = 1;
    let p = Partition::from_membership(membership, 2).unwrap();

    let text = write_to_string(&s, &p);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["0 5", "5 6", "6 7", "7 5"]);

    // and with the numbering flipped, the size-1 block still leads
    let s = store("7 0\n0 1\n1 2\n2 0\n");
    let mut membership = vec![0; 8];
    membership[7] = 1;
    let p = Partition::from_membership(membership, 2).unwrap();
    let text = write_to_string(&s, &p);
    assert_eq!(text.lines().next(), Some("7 0"));
}

#[test]
fn scenario_c_vertex_without_out_edges_is_absent() {
    // vertex 3 only appears as a destination
    let s = store("0 1\n1 0\n2 3\n");
    let p = Partition::from_membership(vec![0, 0, 1, 1], 2).unwrap();
    let ordered = ReorderEngine::new().reorder(&s, &p);
    let sources: Vec<_> = ordered.vertex_order().collect();
    assert!(!sources.contains(&3));

    let text = write_to_string(&s, &p);
    assert!(text.lines().all(|l| !l.starts_with("3 ")));
}

#[test]
fn scenario_d_malformed_line_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "0 1\nabc def\n").unwrap();

    let err = ReorderPipeline::new(Louvain::new())
        .with_timer(NoopTimer)
        .run(&input, &output)
        .unwrap_err();
    assert!(matches!(err, ReorderError::InputFormat { line: 2, .. }), "{err}");
    assert!(!output.exists());

    assert!(matches!(
        AdjacencyStore::from_reader("abc def\n".as_bytes()),
        Err(ReorderError::InputFormat { line: 1, .. })
    ));
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AdjacencyStore::from_path(dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, ReorderError::Io(_)));
}

#[test]
fn out_of_range_partition_is_rejected() {
    let err = Partition::from_membership(vec![0, 3, 1], 2).unwrap_err();
    let err: ReorderError = err.into();
    assert!(matches!(err, ReorderError::Partition(_)));
}

#[test]
fn round_trip_preserves_neighbor_lists() {
    let input = "3 1\n0 2\n2 0\n1 3\n0 1\n4 4\n1 0\n2 3\n0 2\n";
    let original = store(input);
    let p = Partition::from_membership(vec![0, 1, 0, 1, 2], 3).unwrap();

    let text = write_to_string(&original, &p);
    let reread = store(&text);

    assert_eq!(reread.sorted_sources(), original.sorted_sources());
    for u in original.sorted_sources() {
        assert_eq!(reread.neighbors_of(u), original.neighbors_of(u), "vertex {u}");
    }
    assert_eq!(reread.edge_count(), original.edge_count());
}

#[test]
fn pipeline_file_to_file_with_louvain() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("graph.txt");
    let output = dir.path().join("graph.reordered.txt");

    // two 4-cliques joined by one edge, written in both directions
    let mut text = String::new();
    let mut undirected = vec![(0, 7)];
    for base in [0, 4] {
        for i in 0..4 {
            for j in (i + 1)..4 {
                undirected.push((base + i, base + j));
            }
        }
    }
    for &(u, v) in &undirected {
        text.push_str(&format!("{u} {v}\n{v} {u}\n"));
    }
    fs::write(&input, &text).unwrap();
    fs::write(&output, "stale content\n").unwrap();

    let timer = RecordingTimer::new();
    let summary = ReorderPipeline::new(Louvain::new())
        .with_timer(&timer)
        .run(&input, &output)
        .unwrap();
    assert_eq!(summary.communities, 2);
    assert_eq!(summary.vertices, 8);
    assert_eq!(summary.edges, 2 * undirected.len());
    assert_eq!(
        timer.stages(),
        vec![Stage::Load, Stage::Partition, Stage::Reorder, Stage::Save]
    );

    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("stale"));
    let order: Vec<usize> = {
        let mut seen = Vec::new();
        for line in written.lines() {
            let u: usize = line.split(' ').next().unwrap().parse().unwrap();
            if seen.last() != Some(&u) {
                seen.push(u);
            }
        }
        seen
    };
    // each clique is emitted as one contiguous run
    let first_half: BTreeSet<_> = order[..4].iter().copied().collect();
    assert!(
        first_half == BTreeSet::from([0, 1, 2, 3]) || first_half == BTreeSet::from([4, 5, 6, 7]),
        "order = {order:?}"
    );
}

#[test]
fn pipeline_with_fixed_partition_and_contiguous_labels() {
    let p = Partition::from_membership(vec![1, 1, 0, 0, 0], 2).unwrap();
    let pipeline = ReorderPipeline::new(FixedPartition::new(p))
        .with_timer(NoopTimer)
        .with_writer(GraphWriter::new().with_labels(Labels::Contiguous));
    let mut out = Vec::new();
    pipeline
        .run_with("0 1\n1 0\n2 3\n3 4\n4 2\n3 2\n".as_bytes(), &mut out)
        .unwrap();
    // {0, 1} first, then {2, 4, 3} by degree
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 1\n1 0\n2 4\n3 2\n4 3\n4 2\n"
    );
}
