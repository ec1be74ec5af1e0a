//! Text regeneration with bridge words
//!
//! Re-renders an input text against an existing graph, splicing a
//! uniformly random bridge word between each adjacent pair that one exists
//! for. Words absent from the graph pass through untouched.

use crate::graph::WordGraph;
use crate::query::bridge::bridge_candidates;
use crate::tokenize::tokenize;
use rand::Rng;

/// Weave bridge words into `text` with a thread-local generator.
pub fn insert_bridge_words(graph: &WordGraph, text: &str) -> String {
    insert_bridge_words_with_rng(graph, text, &mut rand::rng())
}

/// Weave bridge words into `text` with a caller-supplied generator.
///
/// The input is normalized first, so the output is a lowercase
/// space-separated word sequence. Inputs with fewer than two tokens come
/// back unchanged (post-normalization).
pub fn insert_bridge_words_with_rng<R: Rng + ?Sized>(
    graph: &WordGraph,
    text: &str,
    rng: &mut R,
) -> String {
    let tokens = tokenize(text);
    if tokens.len() < 2 {
        return tokens.join(" ");
    }

    let mut out: Vec<&str> = Vec::with_capacity(tokens.len() * 2);
    for pair in tokens.windows(2) {
        out.push(&pair[0]);
        let candidates = bridge_candidates(graph, &pair[0], &pair[1]);
        if !candidates.is_empty() {
            let pick = candidates[rng.random_range(0..candidates.len())];
            out.push(&graph.words[pick as usize]);
        }
    }
    if let Some(last) = tokens.last() {
        out.push(last);
    }

    out.join(" ")
}
