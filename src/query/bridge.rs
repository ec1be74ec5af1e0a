//! Bridge-word discovery
//!
//! A bridge word `b` links `w1` to `w2` when the edges `w1 -> b` and
//! `b -> w2` both exist. The lookup is a pure intersection over the
//! snapshot's adjacency sets.

use crate::graph::WordGraph;
use crate::types::NodeId;
use serde::Serialize;

/// Outcome of a bridge-word query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BridgeWords {
    /// The first word is not in the graph
    SourceMissing,
    /// The second word is not in the graph
    TargetMissing,
    /// Both words exist but nothing bridges them
    NoBridge,
    /// Bridge words, sorted lexicographically
    Found(Vec<String>),
}

/// Find all bridge words from `word1` to `word2`.
///
/// Inputs may be mixed-case; they are lowercased before lookup.
pub fn bridge_words(graph: &WordGraph, word1: &str, word2: &str) -> BridgeWords {
    let source = match graph.resolve(word1) {
        Some(id) => id,
        None => return BridgeWords::SourceMissing,
    };
    let target = match graph.resolve(word2) {
        Some(id) => id,
        None => return BridgeWords::TargetMissing,
    };

    let candidates = candidates_between(graph, source, target);
    if candidates.is_empty() {
        return BridgeWords::NoBridge;
    }

    let mut words: Vec<String> = candidates
        .into_iter()
        .map(|id| graph.words[id as usize].clone())
        .collect();
    words.sort();
    BridgeWords::Found(words)
}

/// The raw candidate set, with no absence distinction.
///
/// Empty when either word is unknown or nothing bridges the pair; callers
/// that only need "is there a bridge, and which" use this form.
pub fn bridge_candidates(graph: &WordGraph, word1: &str, word2: &str) -> Vec<NodeId> {
    match (graph.resolve(word1), graph.resolve(word2)) {
        (Some(source), Some(target)) => candidates_between(graph, source, target),
        _ => Vec::new(),
    }
}

fn candidates_between(graph: &WordGraph, source: NodeId, target: NodeId) -> Vec<NodeId> {
    graph.adjacency[source as usize]
        .iter()
        .copied()
        .filter(|&bridge| graph.adjacency[bridge as usize].contains(&target))
        .collect()
}
