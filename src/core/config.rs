//! Solver configuration for the vertex-cover strategies

use serde::{Serialize, Deserialize};
use std::time::Duration;

/// Rule for choosing among equal-degree vertices in the greedy strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Smallest vertex label by `Ord`
    #[default]
    LowestLabel,
    /// Vertex added to the graph first
    InsertionOrder,
}

/// Solver configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Greedy tie-break rule
    pub tie_break: TieBreak,
    /// Maximum number of candidate subsets the exact solver may test
    pub max_subsets: Option<u64>,
    /// Wall-clock budget for the exact solver
    pub deadline: Option<Duration>,
    /// Size of a subset level above which candidates are tested in parallel
    pub parallel_threshold: usize,
}

impl SolverConfig {
    /// Create config that caps the exact search at `max_subsets` candidates
    pub fn bounded(max_subsets: u64) -> Self {
        SolverConfig {
            max_subsets: Some(max_subsets),
            ..Self::default()
        }
    }

    /// Replace the greedy tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set a deadline for the exact solver
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_subsets == Some(0) {
            return Err(crate::LabError::InvalidArgument(
                "max_subsets must be positive".to_string(),
            ));
        }

        if self.parallel_threshold == 0 {
            return Err(crate::LabError::InvalidArgument(
                "parallel_threshold must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            tie_break: TieBreak::LowestLabel,
            max_subsets: None,
            deadline: None,
            parallel_threshold: 4096,
        }
    }
}
