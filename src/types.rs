//! Core types for textgraph
//!
//! This module defines the node/edge identifiers, the edge record, and the
//! PageRank configuration shared across the library.

use crate::errors::{GraphError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Index of a node in the graph's word arena.
///
/// Node identity is the lowercase word; two occurrences of the same word
/// (in any casing) always resolve to the same id.
pub type NodeId = u32;

/// Index of an edge in the snapshot's edge list.
pub type EdgeId = u32;

// ============================================================================
// Edge
// ============================================================================

/// A directed edge between two words.
///
/// At most one edge exists per ordered (source, target) pair; repeated
/// adjacent occurrences in the token sequence increment `weight` instead of
/// adding duplicate edges. Self-loops are permitted when a token repeats
/// itself consecutively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Node the edge leaves from
    pub source: NodeId,
    /// Node the edge arrives at
    pub target: NodeId,
    /// Number of times `source` was immediately followed by `target`
    pub weight: u32,
}

// ============================================================================
// PageRank configuration
// ============================================================================

/// Configuration for the PageRank engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (typically 0.85), must lie in (0, 1)
    pub damping: f64,
    /// Maximum number of iterations before giving up on convergence
    pub max_iterations: usize,
    /// Convergence threshold: stop when the L1 score delta < threshold
    pub convergence_threshold: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-6,
        }
    }
}

impl PageRankConfig {
    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Validate the configuration, rejecting values the iteration cannot
    /// make progress with.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(GraphError::invalid_config(format!(
                "damping must be in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.convergence_threshold > 0.0) {
            return Err(GraphError::invalid_config(format!(
                "convergence threshold must be positive, got {}",
                self.convergence_threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(GraphError::invalid_config(
                "max iterations must be at least 1",
            ));
        }
        Ok(())
    }
}
