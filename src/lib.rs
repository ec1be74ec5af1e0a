//! # textgraph
//!
//! Directed, weighted word-adjacency graphs with analytical queries.
//!
//! A graph is built once from a normalized token sequence and frozen;
//! every query reads the snapshot without mutating it:
//!
//! - **Bridge words**: words linking two others via one intermediate hop
//! - **Shortest paths**: single-pair and single-source Dijkstra over
//!   integer edge weights, with backward path reconstruction
//! - **PageRank**: TF-IDF-seeded iterative fixed point with dangling-mass
//!   redistribution
//! - **Random walks**: stochastic traversal terminating on the first
//!   repeated edge
//!
//! ## Example
//!
//! ```
//! use textgraph::{bridge_words, tokenize, BridgeWords, WordGraph};
//!
//! let tokens = tokenize("the quick fox jumps over the quick dog");
//! let graph = WordGraph::from_tokens(&tokens);
//!
//! assert_eq!(
//!     bridge_words(&graph, "the", "fox"),
//!     BridgeWords::Found(vec!["quick".to_string()]),
//! );
//! ```

pub mod compose;
pub mod errors;
pub mod graph;
pub mod pagerank;
pub mod query;
pub mod tokenize;
pub mod types;
pub mod walk;

// Re-export commonly used types
pub use compose::{insert_bridge_words, insert_bridge_words_with_rng};
pub use errors::{GraphError, Result};
pub use graph::{builder::GraphBuilder, snapshot::WordGraph};
pub use pagerank::{PageRank, PageRankResult};
pub use query::bridge::{bridge_candidates, bridge_words, BridgeWords};
pub use query::path::{shortest_path, shortest_paths_from, PathResult, PathsFromSource, SourcePath};
pub use tokenize::tokenize;
pub use types::{Edge, EdgeId, NodeId, PageRankConfig};
pub use walk::{random_walk, random_walk_with_rng, WalkResult, WalkTermination};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
