//! Step-by-step bubble sort for the sorting visualizers

use serde::{Serialize, Deserialize};

/// Sequence state after one adjacent swap
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep<T> {
    /// Sequence after the swap
    pub state: Vec<T>,
    /// Swaps performed so far, this one included
    pub swaps: usize,
}

/// Full bubble-sort trace towards the sorted target
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTrace<T> {
    /// Sorted sequence the trace converges to
    pub target: Vec<T>,
    /// One entry per swap
    pub steps: Vec<SortStep<T>>,
}

impl<T> SortTrace<T> {
    /// Number of swaps performed
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the input was already sorted
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get step by position, for stepping back and forth
    pub fn step(&self, index: usize) -> Option<&SortStep<T>> {
        self.steps.get(index)
    }
}

/// Bubble sort `sequence`, recording the state after every swap
pub fn bubble_sort_steps<T: Clone + Ord>(sequence: &[T]) -> SortTrace<T> {
    let mut target = sequence.to_vec();
    target.sort();

    let mut current = sequence.to_vec();
    let mut steps = Vec::new();
    let n = current.len();
    for i in 0..n {
        for j in 0..n.saturating_sub(i + 1) {
            if current[j] > current[j + 1] {
                current.swap(j, j + 1);
                steps.push(SortStep {
                    state: current.clone(),
                    swaps: steps.len() + 1,
                });
            }
        }
    }

    tracing::debug!(length = n, swaps = steps.len(), "bubble sort traced");
    SortTrace { target, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ends_sorted() {
        let trace = bubble_sort_steps(&[3, 1, 2]);
        assert_eq!(trace.target, vec![1, 2, 3]);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.step(0).unwrap().state, vec![1, 3, 2]);
        assert_eq!(trace.steps.last().unwrap().state, trace.target);
        assert_eq!(trace.steps.last().unwrap().swaps, 2);
    }

    #[test]
    fn test_sorted_input_has_no_steps() {
        assert!(bubble_sort_steps(&[1, 2, 3]).is_empty());
        assert!(bubble_sort_steps::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_swaps_equal_inversions() {
        let trace = bubble_sort_steps(&[5, 4, 3, 2, 1]);
        assert_eq!(trace.len(), 10);
    }
}
