//! Multilevel Louvain community detection.
//!
//! ## Objective (Newman modularity)
//!
//! Let
//! - `m` = total edge weight of the graph (each undirected edge once).
//! - `k_i` = weighted degree of node `i` (self-loops count twice).
//! - `tot_c` = sum of `k_i` over nodes in community `c`.
//! - `w_ic` = weight of edges between `i` and nodes of `c` (excluding `i`).
//!
//! Moving an isolated node `i` into community `c` changes modularity by
//!
//! ```text
//! ΔQ = (1/m) * (w_ic - γ * tot_c * k_i / (2m))
//! ```
//!
//! so each local move picks the community with the largest bracketed term.
//!
//! ## Levels
//!
//! 1. **Local moving**: every node starts alone; nodes are visited in order and
//!    moved to the neighbouring community with the best gain, repeating passes
//!    until nothing moves.
//! 2. **Aggregation**: each community becomes one weighted node; internal
//!    edges become self-loops.
//!
//! Levels repeat until a level moves nothing or `max_levels` is reached.
//!
//! ## Determinism
//!
//! Node order is ascending unless `shuffle` is set, in which case it is drawn
//! from `SmallRng::seed_from_u64(rng_seed)`. Ties keep the current community,
//! then the first candidate in neighbour order. Final community ids are dense
//! and numbered by first appearance over ascending vertex ids.

use crate::graph::UndirectedGraph;
use crate::graph::graph_traits::CommunityGraph;
use crate::partitioning::metrics::modularity;
use crate::partitioning::{CommunityOracle, Partition, PartitionError};
use hashbrown::HashMap as FastMap;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Configuration for [`Louvain`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LouvainConfig {
    /// Resolution γ; higher values give smaller communities.
    pub resolution: f64,
    /// Maximum number of aggregation levels.
    pub max_levels: usize,
    /// Maximum local-moving passes per level.
    pub max_passes: usize,
    /// A move must beat the current community by more than this.
    pub min_gain: f64,
    /// Visit nodes in a seeded random order instead of ascending order.
    pub shuffle: bool,
    pub rng_seed: u64,
}

impl Default for LouvainConfig {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            max_levels: 32,
            max_passes: 128,
            min_gain: 1e-10,
            shuffle: false,
            rng_seed: 42,
        }
    }
}

impl LouvainConfig {
    pub fn validate(&self) -> Result<(), PartitionError> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(PartitionError::InvalidConfig(
                "resolution must be finite and positive",
            ));
        }
        if !self.min_gain.is_finite() || self.min_gain < 0.0 {
            return Err(PartitionError::InvalidConfig(
                "min_gain must be finite and non-negative",
            ));
        }
        if self.max_passes == 0 {
            return Err(PartitionError::InvalidConfig("max_passes must be at least 1"));
        }
        Ok(())
    }
}

/// Louvain community oracle.
#[derive(Debug, Clone, Default)]
pub struct Louvain {
    config: LouvainConfig,
}

impl Louvain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LouvainConfig) -> Self {
        Self { config }
    }

    /// Set resolution parameter.
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.config.resolution = resolution;
        self
    }

    /// Set maximum aggregation levels.
    pub fn with_max_levels(mut self, levels: usize) -> Self {
        self.config.max_levels = levels;
        self
    }

    /// Visit nodes in a random order drawn from `seed`.
    pub fn with_shuffle(mut self, seed: u64) -> Self {
        self.config.shuffle = true;
        self.config.rng_seed = seed;
        self
    }

    pub fn config(&self) -> &LouvainConfig {
        &self.config
    }

    /// Detect communities in any [`CommunityGraph`].
    pub fn detect<G: CommunityGraph>(&self, graph: &G) -> Result<Partition, PartitionError> {
        self.config.validate()?;
        let n = graph.vertex_count();
        if n == 0 {
            return Ok(Partition::empty());
        }

        let mut level = LevelGraph::from_graph(graph);
        // original vertex -> node of the current level
        let mut membership: Vec<usize> = (0..n).collect();
        let mut rng = SmallRng::seed_from_u64(self.config.rng_seed);

        for level_no in 0..self.config.max_levels {
            let mut order: Vec<usize> = (0..level.len()).collect();
            if self.config.shuffle {
                order.shuffle(&mut rng);
            }
            let (communities, moved) = self.local_moving(&level, &order);
            if !moved {
                break;
            }
            let (communities, k) = renumber(&communities);
            for node in membership.iter_mut() {
                *node = communities[*node];
            }
            log::debug!(
                "louvain level {level_no}: {} nodes -> {k} communities",
                level.len()
            );
            if k == level.len() {
                break;
            }
            level = level.aggregate(&communities, k);
        }

        let (membership, k) = renumber(&membership);
        Partition::from_membership(membership, k)
    }

    /// Phase 1: local moving on one level.
    /// Returns (communities, moved).
    fn local_moving(&self, g: &LevelGraph, order: &[usize]) -> (Vec<usize>, bool) {
        let n = g.len();
        let mut communities: Vec<usize> = (0..n).collect();
        let m = g.total_weight;
        if m <= 0.0 {
            return (communities, false);
        }

        let mut tot = g.degrees.clone();
        let mut weight_to = vec![0.0f64; n];
        let mut seen = vec![false; n];
        let mut candidates: Vec<usize> = Vec::new();
        let mut moved = false;

        for _pass in 0..self.config.max_passes {
            let mut moves = 0usize;
            for &node in order {
                let current = communities[node];
                let ki = g.degrees[node];

                candidates.clear();
                candidates.push(current);
                seen[current] = true;
                for &(nbr, w) in &g.adj[node] {
                    let c = communities[nbr];
                    if !seen[c] {
                        seen[c] = true;
                        candidates.push(c);
                    }
                    weight_to[c] += w;
                }

                tot[current] -= ki;
                let scale = self.config.resolution * ki / (2.0 * m);
                let mut best = current;
                let mut best_gain = weight_to[current] - tot[current] * scale;
                for &c in &candidates[1..] {
                    let gain = weight_to[c] - tot[c] * scale;
                    if gain - best_gain > self.config.min_gain {
                        best = c;
                        best_gain = gain;
                    }
                }
                tot[best] += ki;
                if best != current {
                    communities[node] = best;
                    moves += 1;
                }

                for &c in &candidates {
                    weight_to[c] = 0.0;
                    seen[c] = false;
                }
            }
            if moves == 0 {
                break;
            }
            moved = true;
        }
        (communities, moved)
    }
}

impl CommunityOracle for Louvain {
    type Graph = UndirectedGraph;

    fn partition(&self, graph: &UndirectedGraph) -> Result<Partition, PartitionError> {
        self.detect(graph)
    }

    fn quality(&self, graph: &UndirectedGraph, partition: &Partition) -> Option<f64> {
        modularity(graph, partition, self.config.resolution)
    }
}

/// Remap labels to `0..k` in order of first appearance.
fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut remap: FastMap<usize, usize> = FastMap::with_capacity(labels.len());
    let out = labels
        .iter()
        .map(|&l| {
            let next = remap.len();
            *remap.entry(l).or_insert(next)
        })
        .collect();
    (out, remap.len())
}

/// Weighted graph for one Louvain level.
#[derive(Debug, Clone)]
struct LevelGraph {
    /// Merged neighbour weights per node, sorted by neighbour, self excluded.
    adj: Vec<Vec<(usize, f64)>>,
    /// Self-loop weight per node.
    loops: Vec<f64>,
    /// Weighted degree per node, self-loops counted twice.
    degrees: Vec<f64>,
    /// Total edge weight `m`.
    total_weight: f64,
}

impl LevelGraph {
    fn from_graph<G: CommunityGraph>(g: &G) -> Self {
        Self::from_weighted(g.vertex_count(), g.edges().map(|(u, v)| (u, v, 1.0)))
    }

    fn from_weighted<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        let mut loops = vec![0.0; n];
        let mut pairs: FastMap<(usize, usize), f64> = FastMap::new();
        for (u, v, w) in edges {
            if u == v {
                loops[u] += w;
            } else {
                // keep key ordered so (2,5) and (5,2) fold together
                let key = if u < v { (u, v) } else { (v, u) };
                *pairs.entry(key).or_insert(0.0) += w;
            }
        }
        let mut pairs: Vec<((usize, usize), f64)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|&(key, _)| key);

        let mut adj = vec![Vec::new(); n];
        let mut degrees = vec![0.0; n];
        let mut total_weight = 0.0;
        for ((a, b), w) in pairs {
            adj[a].push((b, w));
            adj[b].push((a, w));
            degrees[a] += w;
            degrees[b] += w;
            total_weight += w;
        }
        for (i, &sl) in loops.iter().enumerate() {
            degrees[i] += 2.0 * sl;
            total_weight += sl;
        }

        Self {
            adj,
            loops,
            degrees,
            total_weight,
        }
    }

    fn len(&self) -> usize {
        self.adj.len()
    }

    /// Phase 2: contract communities (dense in `0..k`) into single nodes.
    fn aggregate(&self, communities: &[usize], k: usize) -> Self {
        let inner = self
            .loops
            .iter()
            .enumerate()
            .map(|(i, &sl)| (communities[i], communities[i], sl));
        let between = self.adj.iter().enumerate().flat_map(|(i, nbrs)| {
            nbrs.iter()
                .filter(move |&&(j, _)| i < j)
                .map(move |&(j, w)| (communities[i], communities[j], w))
        });
        Self::from_weighted(k, inner.chain(between))
    }
}
