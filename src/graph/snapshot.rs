//! The frozen graph snapshot
//!
//! A [`WordGraph`] is produced once by the builder and never mutated
//! afterwards; every query component reads it through `&self`. Nodes are
//! addressed by small integer ids into a word arena, and the derived
//! indices (adjacency sets, in/out edge lists, out-degree, term frequency)
//! are flat vectors keyed by that id.

use crate::graph::builder::GraphBuilder;
use crate::graph::fold_case;
use crate::types::{Edge, EdgeId, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

/// An immutable directed word-adjacency graph.
#[derive(Debug, Clone)]
pub struct WordGraph {
    pub(crate) words: Vec<String>,
    pub(crate) word_to_id: FxHashMap<String, NodeId>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) adjacency: Vec<FxHashSet<NodeId>>,
    pub(crate) out_edges: Vec<Vec<EdgeId>>,
    pub(crate) in_edges: Vec<Vec<EdgeId>>,
    pub(crate) out_degree: Vec<u32>,
    pub(crate) term_frequency: Vec<u32>,
}

impl WordGraph {
    /// Build a graph directly from an ordered token sequence.
    ///
    /// Shorthand for `GraphBuilder::from_tokens(tokens).build()`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        GraphBuilder::from_tokens(tokens).build()
    }

    /// Number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Number of distinct ordered pairs (edges) in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Resolve a word to its node id. Lookup is case-insensitive.
    pub fn resolve(&self, word: &str) -> Option<NodeId> {
        self.word_to_id.get(fold_case(word).as_ref()).copied()
    }

    /// Check whether a word is in the graph (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).is_some()
    }

    /// The word stored for `id`
    pub fn word(&self, id: NodeId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// Iterate over all nodes as (id, word) pairs
    pub fn words(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (i as NodeId, w.as_str()))
    }

    /// The full edge list, in first-occurrence order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The edge stored for `id`
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id as usize)
    }

    /// The set of direct successors of `id`
    pub fn successors(&self, id: NodeId) -> Option<&FxHashSet<NodeId>> {
        self.adjacency.get(id as usize)
    }

    /// Ids of the edges leaving `id`, in first-occurrence order
    pub fn edges_from(&self, id: NodeId) -> &[EdgeId] {
        self.out_edges
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of the edges arriving at `id`
    pub fn edges_into(&self, id: NodeId) -> &[EdgeId] {
        self.in_edges
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Count of distinct successors of `id`; 0 marks a dangling node
    pub fn out_degree(&self, id: NodeId) -> u32 {
        self.out_degree.get(id as usize).copied().unwrap_or(0)
    }

    /// Number of times the word behind `id` occurred in the token sequence
    pub fn term_frequency(&self, id: NodeId) -> u32 {
        self.term_frequency.get(id as usize).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordGraph {
        WordGraph::from_tokens(&["the", "quick", "fox", "jumps", "the", "quick"])
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let graph = sample();

        let id = graph.resolve("Quick").unwrap();
        assert_eq!(graph.word(id), Some("quick"));
        assert!(graph.contains("FOX"));
        assert!(!graph.contains("wolf"));
    }

    #[test]
    fn test_node_count_matches_distinct_words() {
        let graph = sample();
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn test_out_degree_matches_adjacency() {
        let graph = sample();
        for (id, _) in graph.words() {
            assert_eq!(
                graph.out_degree(id) as usize,
                graph.successors(id).unwrap().len()
            );
        }
    }

    #[test]
    fn test_edge_indices_agree() {
        let graph = sample();
        for (id, _) in graph.words() {
            for &eid in graph.edges_from(id) {
                assert_eq!(graph.edge(eid).unwrap().source, id);
            }
            for &eid in graph.edges_into(id) {
                assert_eq!(graph.edge(eid).unwrap().target, id);
            }
        }
    }

    #[test]
    fn test_dangling_node_has_zero_out_degree() {
        let graph = WordGraph::from_tokens(&["a", "b", "c"]);
        let c = graph.resolve("c").unwrap();
        assert_eq!(graph.out_degree(c), 0);
        assert!(graph.edges_from(c).is_empty());
    }

    #[test]
    fn test_out_of_range_accessors_are_empty() {
        let graph = sample();
        assert_eq!(graph.word(999), None);
        assert!(graph.edges_from(999).is_empty());
        assert!(graph.edges_into(999).is_empty());
        assert_eq!(graph.out_degree(999), 0);
        assert_eq!(graph.term_frequency(999), 0);
    }
}
