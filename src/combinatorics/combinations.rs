//! Duplicate-free r-combinations of a multiset

use crate::utils::timing::timed;
use crate::{LabError, Result};
use serde::{Serialize, Deserialize};
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::time::Duration;

/// All distinct `r`-sized selections from `elements`
///
/// The input is sorted first, so every combination is a sorted tuple and two
/// selections that differ only in which duplicate was picked become equal.
/// Results are returned in lexicographic order.
///
/// Fails with [`LabError::InvalidArgument`] unless `1 <= r <= elements.len()`.
pub fn generate_unique_combinations<T: Clone + Ord>(elements: &[T], r: usize) -> Result<Vec<Vec<T>>> {
    check_size(elements.len(), r)?;

    let mut sorted = elements.to_vec();
    sorted.sort();

    let unique: BTreeSet<Vec<T>> = index_combinations(sorted.len(), r)
        .map(|indices| indices.iter().map(|&i| sorted[i].clone()).collect())
        .collect();

    tracing::debug!(
        elements = elements.len(),
        r,
        combinations = unique.len(),
        "generated unique combinations"
    );
    Ok(unique.into_iter().collect())
}

/// Like [`generate_unique_combinations`] for elements without a total order
///
/// `key` imposes the order used for sorting (for example a string
/// rendering). The sort is stable, so elements with equal keys keep their
/// input order. Results come out in first-seen enumeration order.
pub fn unique_combinations_by_key<T, K, F>(elements: &[T], r: usize, key: F) -> Result<Vec<Vec<T>>>
where
    T: Clone + Eq + Hash,
    K: Ord,
    F: FnMut(&T) -> K,
{
    check_size(elements.len(), r)?;

    let mut sorted = elements.to_vec();
    sorted.sort_by_key(key);

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for indices in index_combinations(sorted.len(), r) {
        let combo: Vec<T> = indices.iter().map(|&i| sorted[i].clone()).collect();
        if seen.insert(combo.clone()) {
            results.push(combo);
        }
    }
    Ok(results)
}

/// Distinct `r`-sized sets of distinct values from `elements`
///
/// Repeated values are collapsed before selecting, so no combination holds
/// the same value twice: `[1, 2, 3, 3]` with `r = 2` gives `(1, 2)`,
/// `(1, 3)` and `(2, 3)`. Fails unless `1 <= r <= ` the number of distinct
/// values.
pub fn generate_distinct_combinations<T: Clone + Ord>(elements: &[T], r: usize) -> Result<Vec<Vec<T>>> {
    let distinct: Vec<T> = elements.iter().cloned().collect::<BTreeSet<T>>().into_iter().collect();
    generate_unique_combinations(&distinct, r)
}

fn check_size(len: usize, r: usize) -> Result<()> {
    if r == 0 || r > len {
        return Err(LabError::InvalidArgument(format!(
            "Combination size {} must be between 1 and {}",
            r, len
        )));
    }
    Ok(())
}

/// Lazy lexicographic enumeration of index tuples `i1 < i2 < ... < ir` over `0..n`
#[derive(Clone, Debug)]
pub struct IndexCombinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Iterator for IndexCombinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        let r = self.indices.len();
        // Rightmost position that can still move right
        let Some(i) = (0..r).rev().find(|&i| self.indices[i] < self.n - r + i) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in i + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// All `r`-subsets of `0..n` as sorted index tuples, lexicographically
///
/// Yields nothing when `r > n` and a single empty tuple when `r == 0`.
pub fn index_combinations(n: usize, r: usize) -> IndexCombinations {
    IndexCombinations {
        n,
        indices: (0..r).collect(),
        started: false,
        done: r > n,
    }
}

/// Number of unique combinations, the time taken and the combinations
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationReport<T> {
    /// Number of distinct combinations
    pub count: usize,
    /// Wall time of the generation
    pub elapsed: Duration,
    /// The combinations, in lexicographic order
    pub combinations: Vec<Vec<T>>,
}

/// Generate unique combinations and time the run
pub fn compare_unique_combinations<T: Clone + Ord>(
    elements: &[T],
    r: usize,
) -> Result<CombinationReport<T>> {
    let (combinations, elapsed) = timed(|| generate_unique_combinations(elements, r));
    let combinations = combinations?;
    Ok(CombinationReport {
        count: combinations.len(),
        elapsed,
        combinations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_collapses() {
        let combos = generate_unique_combinations(&[1, 2, 3, 3], 2).unwrap();
        assert_eq!(combos, vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![3, 3]]);
    }

    #[test]
    fn test_distinct_values_only() {
        let combos = generate_distinct_combinations(&[1, 2, 3, 3], 2).unwrap();
        assert_eq!(combos, vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
        assert!(generate_distinct_combinations(&[1, 2, 3, 3], 4).is_err());
    }

    #[test]
    fn test_unsorted_input() {
        let combos = generate_unique_combinations(&["c", "a", "b", "a"], 3).unwrap();
        assert_eq!(
            combos,
            vec![vec!["a", "a", "b"], vec!["a", "a", "c"], vec!["a", "b", "c"]]
        );
    }

    #[test]
    fn test_full_size() {
        let combos = generate_unique_combinations(&[5, 4, 5], 3).unwrap();
        assert_eq!(combos, vec![vec![4, 5, 5]]);
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(matches!(
            generate_unique_combinations(&[1, 2, 3], 0),
            Err(LabError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_unique_combinations(&[1, 2, 3], 4),
            Err(LabError::InvalidArgument(_))
        ));
        assert!(generate_unique_combinations::<i32>(&[], 1).is_err());
    }

    #[test]
    fn test_by_key() {
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        enum Token {
            Num(i32),
            Word(&'static str),
        }

        let elements = [Token::Word("b"), Token::Num(1), Token::Word("b")];
        let combos = unique_combinations_by_key(&elements, 2, |t| format!("{:?}", t)).unwrap();
        assert_eq!(
            combos,
            vec![
                vec![Token::Num(1), Token::Word("b")],
                vec![Token::Word("b"), Token::Word("b")],
            ]
        );
    }

    #[test]
    fn test_index_combinations() {
        let all: Vec<Vec<usize>> = index_combinations(4, 2).collect();
        assert_eq!(
            all,
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
        assert_eq!(index_combinations(5, 5).count(), 1);
        assert_eq!(index_combinations(3, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(index_combinations(2, 3).count(), 0);
    }

    #[test]
    fn test_report() {
        let report = compare_unique_combinations(&[1, 1, 2], 2).unwrap();
        assert_eq!(report.count, 2);
        assert_eq!(report.combinations, vec![vec![1, 1], vec![1, 2]]);
        assert!(compare_unique_combinations(&[1], 2).is_err());
    }
}
