//! Random graph walks
//!
//! Each walk starts at a uniformly random node and follows uniformly
//! random out-edges until it reaches a node with no exits or picks an edge
//! it has already traversed. Walks are stateless between calls; the public
//! entry point draws from a thread-local generator, and the `_with_rng`
//! variant takes a caller-owned one for reproducible runs.

use crate::graph::WordGraph;
use crate::types::NodeId;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Why a walk stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WalkTermination {
    /// The graph has no nodes to start from
    EmptyGraph,
    /// The current node has no outgoing edges
    NoOutgoingEdges,
    /// The walk selected an edge it had already traversed
    RepeatedEdge { source: String, target: String },
}

impl fmt::Display for WalkTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkTermination::EmptyGraph => write!(f, "empty graph"),
            WalkTermination::NoOutgoingEdges => write!(f, "no outgoing edges"),
            WalkTermination::RepeatedEdge { source, target } => {
                write!(f, "repeated edge encountered: {} -> {}", source, target)
            }
        }
    }
}

/// A finished walk: the visited words, why it stopped, and the summed
/// weight of the distinct edges traversed.
///
/// A terminating repeated edge appends its target to the path but does not
/// count toward `total_weight`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkResult {
    pub path: Vec<String>,
    pub termination: WalkTermination,
    pub total_weight: u32,
}

/// Walk with a thread-local generator.
pub fn random_walk(graph: &WordGraph) -> WalkResult {
    random_walk_with_rng(graph, &mut rand::rng())
}

/// Walk with a caller-supplied generator.
pub fn random_walk_with_rng<R: Rng + ?Sized>(graph: &WordGraph, rng: &mut R) -> WalkResult {
    if graph.is_empty() {
        return WalkResult {
            path: Vec::new(),
            termination: WalkTermination::EmptyGraph,
            total_weight: 0,
        };
    }

    let mut visited = vec![false; graph.edge_count()];
    let mut total_weight = 0u32;
    let mut current = rng.random_range(0..graph.node_count()) as NodeId;
    let mut path = vec![graph.words[current as usize].clone()];

    loop {
        let out = &graph.out_edges[current as usize];
        if out.is_empty() {
            return WalkResult {
                path,
                termination: WalkTermination::NoOutgoingEdges,
                total_weight,
            };
        }

        let eid = out[rng.random_range(0..out.len())];
        let edge = &graph.edges[eid as usize];

        if visited[eid as usize] {
            path.push(graph.words[edge.target as usize].clone());
            return WalkResult {
                path,
                termination: WalkTermination::RepeatedEdge {
                    source: graph.words[edge.source as usize].clone(),
                    target: graph.words[edge.target as usize].clone(),
                },
                total_weight,
            };
        }

        visited[eid as usize] = true;
        total_weight += edge.weight;
        current = edge.target;
        path.push(graph.words[current as usize].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_graph() {
        let graph = WordGraph::from_tokens::<String>(&[]);
        let result = random_walk(&graph);

        assert_eq!(result.termination, WalkTermination::EmptyGraph);
        assert!(result.path.is_empty());
        assert_eq!(result.total_weight, 0);
    }

    #[test]
    fn test_chain_walk_stops_at_sink() {
        // Only one walk exists per starting node; from "a" it must be the
        // whole chain, from "c" it stops immediately.
        let graph = WordGraph::from_tokens(&["a", "b", "c"]);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..20 {
            let result = random_walk_with_rng(&graph, &mut rng);
            assert_eq!(result.termination, WalkTermination::NoOutgoingEdges);
            assert_eq!(result.path.last().map(String::as_str), Some("c"));
            assert_eq!(result.total_weight as usize, result.path.len() - 1);
        }
    }

    #[test]
    fn test_cycle_walk_terminates_on_repeat() {
        // A two-node cycle forces an edge repeat after at most three hops.
        let graph = WordGraph::from_tokens(&["a", "b", "a"]);
        let mut rng = SmallRng::seed_from_u64(42);

        let result = random_walk_with_rng(&graph, &mut rng);
        match &result.termination {
            WalkTermination::RepeatedEdge { source, target } => {
                // The repeated pair closes the path.
                let n = result.path.len();
                assert_eq!(&result.path[n - 2], source);
                assert_eq!(&result.path[n - 1], target);
            }
            other => panic!("expected RepeatedEdge, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_edge_weight_excluded() {
        let graph = WordGraph::from_tokens(&["a", "b", "a"]);
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..20 {
            let result = random_walk_with_rng(&graph, &mut rng);
            // Both edges have weight 1; the walk traverses each at most
            // once, so the total is the distinct pair count.
            let mut seen = std::collections::HashSet::new();
            for pair in result.path.windows(2) {
                seen.insert((pair[0].clone(), pair[1].clone()));
            }
            assert_eq!(result.total_weight as usize, seen.len());
        }
    }

    #[test]
    fn test_path_pairs_are_graph_edges() {
        let graph =
            WordGraph::from_tokens(&["the", "quick", "fox", "the", "slow", "fox", "the"]);
        let mut rng = SmallRng::seed_from_u64(11);

        for _ in 0..50 {
            let result = random_walk_with_rng(&graph, &mut rng);
            for pair in result.path.windows(2) {
                let source = graph.resolve(&pair[0]).unwrap();
                let target = graph.resolve(&pair[1]).unwrap();
                assert!(graph.successors(source).unwrap().contains(&target));
            }
        }
    }
}
