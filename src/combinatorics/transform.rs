//! Positional rewriting of one sequence into another

use crate::{LabError, Result};
use serde::{Serialize, Deserialize};
use std::fmt;

/// One substitution in a transformation script
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStep<T> {
    /// Sequence state immediately before this substitution
    pub before: Vec<T>,
    /// Human-readable description naming the old and new value
    pub description: String,
    /// Position being rewritten
    pub index: usize,
    /// Value at `index` before the step
    pub from: T,
    /// Value at `index` after the step
    pub to: T,
}

impl<T: Clone> TransformStep<T> {
    /// Sequence state right after this substitution
    ///
    /// `None` when `index` is outside `before`.
    pub fn after(&self) -> Option<Vec<T>> {
        let mut state = self.before.clone();
        *state.get_mut(self.index)? = self.to.clone();
        Some(state)
    }
}

/// Script that rewrites `start` into `target`, one differing position at a time
///
/// Positions are scanned once from left to right and every index where the
/// sequences disagree produces exactly one step. This is a positional diff,
/// not an edit distance: no insertions, deletions or transpositions are
/// considered, so `[1, 2]` to `[2, 1]` takes two steps.
///
/// Fails with [`LabError::InvalidArgument`] when the lengths differ.
pub fn transform_sequence<T>(start: &[T], target: &[T]) -> Result<Vec<TransformStep<T>>>
where
    T: Clone + PartialEq + fmt::Display,
{
    if start.len() != target.len() {
        return Err(LabError::InvalidArgument(format!(
            "Start has {} elements but target has {}",
            start.len(),
            target.len()
        )));
    }

    let mut current = start.to_vec();
    let mut steps = Vec::new();
    for (index, wanted) in target.iter().enumerate() {
        if current[index] == *wanted {
            continue;
        }
        steps.push(TransformStep {
            before: current.clone(),
            description: format!("Replace {} with {} at position {}", current[index], wanted, index),
            index,
            from: current[index].clone(),
            to: wanted.clone(),
        });
        current[index] = wanted.clone();
    }

    tracing::debug!(length = start.len(), steps = steps.len(), "transformed sequence");
    Ok(steps)
}

/// Replay a script on a copy of `start`
///
/// Each step must match the working state it is applied to; a step recorded
/// against a different sequence is rejected.
pub fn apply_steps<T: Clone + PartialEq>(start: &[T], steps: &[TransformStep<T>]) -> Result<Vec<T>> {
    let mut current = start.to_vec();
    for step in steps {
        if step.before != current || step.index >= current.len() {
            return Err(LabError::InvalidArgument(format!(
                "Step at position {} does not apply to the current sequence",
                step.index
            )));
        }
        current[step.index] = step.to.clone();
    }
    Ok(current)
}
