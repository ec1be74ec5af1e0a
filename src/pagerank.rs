//! TF-IDF-seeded PageRank
//!
//! Iterative fixed-point computation over the frozen graph. Initial scores
//! come from term frequency weighted by an out-degree-based inverse
//! document frequency rather than a uniform prior; each round redistributes
//! the mass sitting on dangling nodes uniformly, and convergence is an L1
//! test between consecutive score vectors. Two flat score vectors are
//! swapped each round, so no intermediate maps are allocated.

use crate::graph::WordGraph;
use crate::types::{NodeId, PageRankConfig};
use serde::Serialize;
use tracing::{debug, warn};

/// PageRank engine
#[derive(Debug, Clone, Default)]
pub struct PageRank {
    config: PageRankConfig,
}

/// Final scores and the iteration count actually consumed.
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Score per node, indexed by node id
    pub scores: Vec<f64>,
    /// Rounds consumed: the converging round's index + 1, or the budget
    pub iterations: usize,
    /// Whether the L1 delta dropped below the threshold within budget
    pub converged: bool,
}

impl PageRankResult {
    /// The score for `id`
    pub fn score(&self, id: NodeId) -> Option<f64> {
        self.scores.get(id as usize).copied()
    }

    /// Scores paired with their words, highest first.
    pub fn ranked(&self, graph: &WordGraph) -> Vec<(String, f64)> {
        let mut out: Vec<(String, f64)> = self
            .scores
            .iter()
            .enumerate()
            .map(|(id, &score)| (graph.words[id].clone(), score))
            .collect();
        out.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        out
    }
}

impl PageRank {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine from an explicit configuration
    pub fn with_config(config: PageRankConfig) -> Self {
        Self { config }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Run to convergence or budget exhaustion.
    ///
    /// A graph with zero nodes yields an empty result after 0 iterations.
    pub fn run(&self, graph: &WordGraph) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                converged: true,
            };
        }

        let d = self.config.damping;
        let nf = n as f64;
        let dangling: Vec<usize> = (0..n).filter(|&i| graph.out_degree[i] == 0).collect();

        let mut scores = seed_scores(graph);
        let mut next = vec![0.0; n];

        for round in 0..self.config.max_iterations {
            let dangling_sum: f64 = dangling.iter().map(|&i| scores[i]).sum();
            let constant = (1.0 - d) / nf + d * dangling_sum / nf;

            for v in 0..n {
                let mut incoming = 0.0;
                for &eid in &graph.in_edges[v] {
                    let u = graph.edges[eid as usize].source as usize;
                    // A dangling in-edge source cannot occur in a consistent
                    // snapshot, but divide by N rather than 0 if it does.
                    let out = graph.out_degree[u];
                    let denominator = if out == 0 { nf } else { f64::from(out) };
                    incoming += scores[u] / denominator;
                }
                next[v] = constant + d * incoming;
            }

            let delta: f64 = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta < self.config.convergence_threshold {
                debug!(iterations = round + 1, delta, "pagerank converged");
                return PageRankResult {
                    scores,
                    iterations: round + 1,
                    converged: true,
                };
            }
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "pagerank exhausted its iteration budget without converging"
        );
        PageRankResult {
            scores,
            iterations: self.config.max_iterations,
            converged: false,
        }
    }
}

/// TF-IDF seed normalized to unit mass.
///
/// `idf(n) = ln(N) - ln(outDegree(n) + 1)`; the `+ 1` keeps the logarithm
/// defined for dangling nodes. When the total seed mass degenerates to
/// zero (a one-node graph has `ln(N) = 0`), the seed falls back to the
/// uniform prior so the stationary distribution is still reachable.
fn seed_scores(graph: &WordGraph) -> Vec<f64> {
    let n = graph.node_count();
    let log_n = (n as f64).ln();

    let seeds: Vec<f64> = (0..n)
        .map(|i| {
            let tf = f64::from(graph.term_frequency[i]);
            let idf = log_n - f64::from(graph.out_degree[i] + 1).ln();
            tf * idf
        })
        .collect();

    let total: f64 = seeds.iter().sum();
    if total > 0.0 && total.is_finite() {
        seeds.into_iter().map(|s| s / total).collect()
    } else {
        vec![1.0 / n as f64; n]
    }
}
