//! # Combilab: combinatorial generation and vertex covers
//!
//! This library holds the algorithmic core of a set of classroom labs:
//! duplicate-free permutations and combinations of multisets, positional
//! sequence rewriting, a bubble-sort step trace and two vertex-cover
//! strategies (exact and greedy) over small undirected graphs.
//!
//! ## Features
//!
//! - **Combinatorics**: backtracking unique permutations, unique combinations,
//!   sequence transformation scripts, sorting traces
//! - **Graphs**: an undirected graph value type, exact and greedy vertex covers
//! - **Utilities**: JSON persistence, timing, free-text input adapters
//!
//! Every operation is pure over its inputs; none of them mutates a
//! caller-owned collection.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Permutations, combinations, sequence transforms and sorting traces
pub mod combinatorics;

/// Undirected graphs and vertex covers
pub mod graph;

/// Solver configuration
pub mod core;

/// Utility functions and helpers
pub mod utils;

use std::time::Duration;

// Re-export commonly used types
pub use combinatorics::{
    generate_unique_combinations, generate_unique_permutations, transform_sequence, TransformStep,
};
pub use graph::{ExactCover, Graph, GreedyCover, VertexCover, VertexCoverSolver};
pub use crate::core::{SolverConfig, TieBreak};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    /// Malformed or mismatched input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The exact solver tested more subsets than allowed
    #[error("Search limit exceeded: more than {limit} candidate subsets")]
    SearchLimitExceeded {
        /// Configured cap on tested subsets
        limit: u64,
    },

    /// The exact solver ran past its deadline
    #[error("Deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, LabError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        combinatorics::{
            bubble_sort_steps, compare_permutation_methods, compare_unique_combinations,
            generate_unique_combinations, generate_unique_permutations, transform_sequence,
            SortTrace, TransformStep,
        },
        core::{SolverConfig, TieBreak},
        graph::{
            compare_cover_strategies, ExactCover, Graph, GreedyCover, VertexCover,
            VertexCoverSolver,
        },
        LabError, Result,
    };
}
