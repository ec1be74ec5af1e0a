//! Graph builder with collapsed weighted edges
//!
//! The builder consumes an ordered token sequence in a single pass,
//! interning each word into an integer-indexed arena and collapsing
//! repeated ordered pairs into one weighted edge via FxHashMap lookups.
//! Freezing the builder derives the remaining query indices.

use crate::graph::fold_case;
use crate::graph::snapshot::WordGraph;
use crate::types::{Edge, EdgeId, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

/// A mutable graph under construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Maps lowercase word -> node id
    word_to_id: FxHashMap<String, NodeId>,
    /// Word arena, indexed by node id
    words: Vec<String>,
    /// Edges in first-occurrence order
    edges: Vec<Edge>,
    /// Maps ordered (source, target) pair -> edge id
    edge_ids: FxHashMap<(NodeId, NodeId), EdgeId>,
    /// Successor sets, indexed by node id
    adjacency: Vec<FxHashSet<NodeId>>,
    /// Token occurrence counts, indexed by node id
    term_frequency: Vec<u32>,
}

impl GraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with pre-allocated node capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            words: Vec::with_capacity(node_capacity),
            edges: Vec::new(),
            edge_ids: FxHashMap::default(),
            adjacency: Vec::with_capacity(node_capacity),
            term_frequency: Vec::with_capacity(node_capacity),
        }
    }

    /// Intern `word`, returning its node id.
    ///
    /// Case is discarded here and cannot be recovered from the graph;
    /// identical words always map to the same id.
    pub fn get_or_create_node(&mut self, word: &str) -> NodeId {
        let word = fold_case(word);
        if let Some(&id) = self.word_to_id.get(word.as_ref()) {
            return id;
        }

        let id = self.words.len() as NodeId;
        let owned = word.into_owned();
        self.word_to_id.insert(owned.clone(), id);
        self.words.push(owned);
        self.adjacency.push(FxHashSet::default());
        self.term_frequency.push(0);
        id
    }

    /// Record one adjacent occurrence of `source` followed by `target`.
    ///
    /// A new ordered pair appends an edge of weight 1; a known pair
    /// increments the existing edge's weight. Ids not minted by this
    /// builder are ignored.
    pub fn record_pair(&mut self, source: NodeId, target: NodeId) {
        if source as usize >= self.words.len() || target as usize >= self.words.len() {
            return;
        }

        self.adjacency[source as usize].insert(target);
        if let Some(&eid) = self.edge_ids.get(&(source, target)) {
            self.edges[eid as usize].weight += 1;
        } else {
            let eid = self.edges.len() as EdgeId;
            self.edge_ids.insert((source, target), eid);
            self.edges.push(Edge {
                source,
                target,
                weight: 1,
            });
        }
    }

    /// Build from an ordered token sequence.
    ///
    /// Sequences shorter than two tokens produce an empty builder: there is
    /// no adjacent pair to register, so no node is created either.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        if tokens.len() < 2 {
            return Self::new();
        }

        let mut builder = Self::with_capacity(tokens.len() / 2);
        for pair in tokens.windows(2) {
            let source = builder.get_or_create_node(pair[0].as_ref());
            let target = builder.get_or_create_node(pair[1].as_ref());
            builder.record_pair(source, target);
        }

        // Term frequency counts every token occurrence, not just pairs.
        for token in tokens {
            let id = builder.get_or_create_node(token.as_ref());
            builder.term_frequency[id as usize] += 1;
        }

        builder
    }

    /// Freeze the builder into an immutable snapshot, deriving the in-edge,
    /// out-edge, and out-degree indices from the edge list.
    pub fn build(self) -> WordGraph {
        let n = self.words.len();
        let mut out_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); n];
        let mut in_edges: Vec<Vec<EdgeId>> = vec![Vec::new(); n];

        for (eid, edge) in self.edges.iter().enumerate() {
            out_edges[edge.source as usize].push(eid as EdgeId);
            in_edges[edge.target as usize].push(eid as EdgeId);
        }

        let out_degree = self.adjacency.iter().map(|s| s.len() as u32).collect();

        debug!(nodes = n, edges = self.edges.len(), "graph frozen");

        WordGraph {
            words: self.words,
            word_to_id: self.word_to_id,
            edges: self.edges,
            adjacency: self.adjacency,
            out_edges,
            in_edges,
            out_degree,
            term_frequency: self.term_frequency,
        }
    }

    /// Get the number of nodes registered so far
    pub fn node_count(&self) -> usize {
        self.words.len()
    }

    /// Get the number of distinct ordered pairs seen so far
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the builder holds no nodes
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_interning_is_idempotent() {
        let mut builder = GraphBuilder::new();

        let a = builder.get_or_create_node("quick");
        let b = builder.get_or_create_node("fox");
        let c = builder.get_or_create_node("quick");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_case_discarded_at_interning() {
        let mut builder = GraphBuilder::new();

        let a = builder.get_or_create_node("Quick");
        let b = builder.get_or_create_node("qUIck");

        assert_eq!(a, b);
        assert_eq!(builder.node_count(), 1);
    }

    #[test]
    fn test_repeated_pair_collapses_into_weight() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("to");
        let b = builder.get_or_create_node("be");

        builder.record_pair(a, b);
        builder.record_pair(a, b);
        builder.record_pair(a, b);

        assert_eq!(builder.edge_count(), 1);
        let graph = builder.build();
        assert_eq!(graph.edges()[0].weight, 3);
    }

    #[test]
    fn test_self_loop_permitted() {
        let graph = GraphBuilder::from_tokens(&toks(&["very", "very", "good"])).build();

        assert_eq!(graph.node_count(), 2);
        let very = graph.resolve("very").unwrap();
        assert!(graph.successors(very).unwrap().contains(&very));
    }

    #[test]
    fn test_short_sequences_yield_empty_graph() {
        assert!(GraphBuilder::from_tokens::<String>(&[]).build().is_empty());
        assert!(GraphBuilder::from_tokens(&toks(&["lonely"])).build().is_empty());
    }

    #[test]
    fn test_weight_sum_equals_pair_count() {
        let tokens = toks(&["a", "b", "a", "b", "c", "a"]);
        let graph = GraphBuilder::from_tokens(&tokens).build();

        let total: u32 = graph.edges().iter().map(|e| e.weight).sum();
        assert_eq!(total as usize, tokens.len() - 1);
    }

    #[test]
    fn test_term_frequency_counts_every_occurrence() {
        let graph = GraphBuilder::from_tokens(&toks(&["the", "cat", "the", "dog"])).build();

        let the = graph.resolve("the").unwrap();
        let cat = graph.resolve("cat").unwrap();
        assert_eq!(graph.term_frequency(the), 2);
        assert_eq!(graph.term_frequency(cat), 1);
    }

    #[test]
    fn test_out_degree_counts_distinct_successors() {
        // "the" is followed by "cat", "dog", and "cat" again: out-degree 2.
        let graph =
            GraphBuilder::from_tokens(&toks(&["the", "cat", "the", "dog", "the", "cat"])).build();

        let the = graph.resolve("the").unwrap();
        assert_eq!(graph.out_degree(the), 2);
    }

    #[test]
    fn test_edges_keep_first_occurrence_order() {
        let graph = GraphBuilder::from_tokens(&toks(&["a", "b", "c", "a", "b"])).build();

        let words: Vec<(&str, &str)> = graph
            .edges()
            .iter()
            .map(|e| {
                (
                    graph.word(e.source).unwrap(),
                    graph.word(e.target).unwrap(),
                )
            })
            .collect();
        assert_eq!(words, vec![("a", "b"), ("b", "c"), ("c", "a")]);
    }

    #[test]
    fn test_record_pair_ignores_unknown_ids() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");

        builder.record_pair(a, 99);
        builder.record_pair(99, a);

        assert_eq!(builder.edge_count(), 0);
    }
}
