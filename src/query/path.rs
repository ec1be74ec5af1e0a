//! Shortest paths over the word graph
//!
//! Dijkstra over non-negative integer weights with a lazily-updated binary
//! heap: a node whose tentative distance improves is pushed again, and
//! stale entries are skipped when popped. Distances live in a flat vector
//! keyed by node id; the `Some` entries are exactly the reachable set.
//! Paths are reconstructed backward from the distance table rather than
//! from a predecessor map.

use crate::graph::WordGraph;
use crate::types::NodeId;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Outcome of a single-pair shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathResult {
    /// The start word is not in the graph
    StartNotFound,
    /// The end word is not in the graph
    EndNotFound,
    /// Both words exist but the end is unreachable from the start
    NoPath,
    /// A shortest path, as the visited words and the summed edge weights
    Found {
        words: Vec<String>,
        total_weight: u32,
    },
}

/// Per-target outcome of a single-source query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePath {
    /// The target word
    pub target: String,
    /// `NoPath` or `Found`; the start is known to exist
    pub result: PathResult,
}

/// Outcome of a single-source shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PathsFromSource {
    /// The source word is not in the graph
    StartNotFound,
    /// One entry per other node, in node-id order
    Found(Vec<SourcePath>),
}

/// Find a shortest path from `word1` to `word2`.
///
/// Inputs may be mixed-case; they are lowercased before lookup. When
/// several equally short paths exist, ties are broken toward the
/// lexicographically smallest predecessor word, so the result is
/// deterministic for a given graph.
pub fn shortest_path(graph: &WordGraph, word1: &str, word2: &str) -> PathResult {
    let start = match graph.resolve(word1) {
        Some(id) => id,
        None => return PathResult::StartNotFound,
    };
    let end = match graph.resolve(word2) {
        Some(id) => id,
        None => return PathResult::EndNotFound,
    };

    let dist = dijkstra(graph, start);
    path_to(graph, start, end, &dist)
}

/// Run Dijkstra once from `word` and report the outcome for every other
/// node in the graph.
pub fn shortest_paths_from(graph: &WordGraph, word: &str) -> PathsFromSource {
    let start = match graph.resolve(word) {
        Some(id) => id,
        None => return PathsFromSource::StartNotFound,
    };

    let dist = dijkstra(graph, start);
    let mut paths = Vec::with_capacity(graph.node_count().saturating_sub(1));
    for id in 0..graph.node_count() as NodeId {
        if id == start {
            continue;
        }
        paths.push(SourcePath {
            target: graph.words[id as usize].clone(),
            result: path_to(graph, start, id, &dist),
        });
    }
    PathsFromSource::Found(paths)
}

/// Shortest distances from `start` to every reachable node.
pub(crate) fn dijkstra(graph: &WordGraph, start: NodeId) -> Vec<Option<u32>> {
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();

    dist[start as usize] = Some(0);
    heap.push(Reverse((0u32, start)));

    while let Some(Reverse((d, node))) = heap.pop() {
        // Stale entry: the node was re-admitted with a shorter distance.
        if dist[node as usize] != Some(d) {
            continue;
        }
        for &eid in &graph.out_edges[node as usize] {
            let edge = &graph.edges[eid as usize];
            let next = d + edge.weight;
            let improved = match dist[edge.target as usize] {
                Some(current) => next < current,
                None => true,
            };
            if improved {
                dist[edge.target as usize] = Some(next);
                heap.push(Reverse((next, edge.target)));
            }
        }
    }

    dist
}

fn path_to(graph: &WordGraph, start: NodeId, end: NodeId, dist: &[Option<u32>]) -> PathResult {
    let total_weight = match dist[end as usize] {
        Some(d) => d,
        None => return PathResult::NoPath,
    };
    match reconstruct(graph, start, end, dist) {
        Some(ids) => PathResult::Found {
            words: ids
                .into_iter()
                .map(|id| graph.words[id as usize].clone())
                .collect(),
            total_weight,
        },
        // A correct distance table always yields a predecessor chain; a
        // failed walk means the table is unusable for this target.
        None => PathResult::NoPath,
    }
}

/// Walk backward from `end`, picking at each step a predecessor `p` with
/// `dist[p] + weight(p -> current) == dist[current]`. Ties go to the
/// lexicographically smallest predecessor word.
fn reconstruct(
    graph: &WordGraph,
    start: NodeId,
    end: NodeId,
    dist: &[Option<u32>],
) -> Option<Vec<NodeId>> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        let d = dist[current as usize]?;
        let mut best: Option<NodeId> = None;
        for &eid in &graph.in_edges[current as usize] {
            let edge = &graph.edges[eid as usize];
            if let Some(sd) = dist[edge.source as usize] {
                if sd + edge.weight != d {
                    continue;
                }
                let better = match best {
                    Some(b) => graph.words[edge.source as usize] < graph.words[b as usize],
                    None => true,
                };
                if better {
                    best = Some(edge.source);
                }
            }
        }
        current = best?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}
