//! Read-only queries over the frozen graph
//!
//! ## Submodules
//!
//! - [`bridge`] — bridge-word discovery over adjacency sets
//! - [`path`] — Dijkstra shortest paths with backward reconstruction

pub mod bridge;
pub mod path;

pub use bridge::{bridge_candidates, bridge_words, BridgeWords};
pub use path::{shortest_path, shortest_paths_from, PathResult, PathsFromSource, SourcePath};
