//! Duplicate-free permutations of a multiset

use crate::utils::timing::timed;
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// All distinct orderings of `elements`
///
/// Backtracks over the remaining options; at every level a value is tried
/// at most once, so equal-valued branches are pruned before they are built
/// and every emitted permutation is distinct. The work done is proportional
/// to the number of distinct permutations times `elements.len()`.
///
/// Results come out in depth-first order: the first permutation is the input
/// order itself. An empty input yields a single empty permutation.
pub fn generate_unique_permutations<T: Clone + Eq + Hash>(elements: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut path = Vec::with_capacity(elements.len());
    let mut options = elements.to_vec();
    backtrack(&mut path, &mut options, &mut results);

    tracing::debug!(
        elements = elements.len(),
        permutations = results.len(),
        "generated unique permutations"
    );
    results
}

fn backtrack<T: Clone + Eq + Hash>(
    path: &mut Vec<T>,
    options: &mut Vec<T>,
    results: &mut Vec<Vec<T>>,
) {
    if options.is_empty() {
        results.push(path.clone());
        return;
    }

    let mut seen = HashSet::with_capacity(options.len());
    for i in 0..options.len() {
        if !seen.insert(options[i].clone()) {
            continue;
        }
        let chosen = options.remove(i);
        path.push(chosen);
        backtrack(path, options, results);
        if let Some(chosen) = path.pop() {
            options.insert(i, chosen);
        }
    }
}

/// Every ordering of `elements`, duplicates included (`n!` results)
///
/// Swap-based backtracking with no pruning at all.
pub fn all_permutations<T: Clone>(elements: &[T]) -> Vec<Vec<T>> {
    let mut results = Vec::new();
    let mut current = elements.to_vec();
    permute_in_place(0, &mut current, &mut results);
    results
}

fn permute_in_place<T: Clone>(start: usize, current: &mut [T], results: &mut Vec<Vec<T>>) {
    if start == current.len() {
        results.push(current.to_vec());
        return;
    }
    for i in start..current.len() {
        current.swap(start, i);
        permute_in_place(start + 1, current, results);
        current.swap(start, i);
    }
}

/// Distinct permutations obtained by generating all `n!` orderings and
/// collapsing them through a set
pub fn dedup_permutations<T: Clone + Eq + Hash>(elements: &[T]) -> HashSet<Vec<T>> {
    all_permutations(elements).into_iter().collect()
}

/// Outcome of running both permutation methods on the same input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PermutationComparison<T: Eq + Hash> {
    /// Number of permutations produced by backtracking
    pub unique_count: usize,
    /// Wall time of the backtracking method
    pub backtracking_time: Duration,
    /// Wall time of generate-all-then-deduplicate
    pub dedup_time: Duration,
    /// Permutations produced by generate-all-then-deduplicate
    pub dedup_results: HashSet<Vec<T>>,
}

impl<T: Eq + Hash> PermutationComparison<T> {
    /// Whether both methods agree on the number of distinct permutations
    pub fn counts_agree(&self) -> bool {
        self.unique_count == self.dedup_results.len()
    }

    /// How many times slower deduplication was than backtracking
    pub fn speedup(&self) -> f64 {
        let backtracking = self.backtracking_time.as_secs_f64();
        if backtracking == 0.0 {
            return f64::INFINITY;
        }
        self.dedup_time.as_secs_f64() / backtracking
    }
}

/// Time backtracking against generate-all-then-deduplicate
///
/// Timings are informative only; the counts must always agree.
pub fn compare_permutation_methods<T: Clone + Eq + Hash>(
    elements: &[T],
) -> PermutationComparison<T> {
    let (unique, backtracking_time) = timed(|| generate_unique_permutations(elements));
    let (dedup_results, dedup_time) = timed(|| dedup_permutations(elements));

    let comparison = PermutationComparison {
        unique_count: unique.len(),
        backtracking_time,
        dedup_time,
        dedup_results,
    };

    if !comparison.counts_agree() {
        tracing::warn!(
            backtracking = comparison.unique_count,
            dedup = comparison.dedup_results.len(),
            "permutation methods disagree"
        );
    }
    comparison
}

/// Expected number of distinct permutations: `n! / (m1! * ... * mk!)`
///
/// Computed incrementally as a product of binomials so intermediate values
/// stay small. Returns `None` on overflow.
pub fn count_unique_permutations<T: Eq + Hash>(elements: &[T]) -> Option<u128> {
    let mut multiplicities: Vec<(&T, u128)> = Vec::new();
    for element in elements {
        match multiplicities.iter_mut().find(|(value, _)| *value == element) {
            Some((_, count)) => *count += 1,
            None => multiplicities.push((element, 1)),
        }
    }

    let mut total: u128 = 1;
    let mut placed: u128 = 0;
    for (_, m) in multiplicities {
        // C(placed + m, m), built one factor at a time
        for j in 1..=m {
            total = total.checked_mul(placed + j)? / j;
        }
        placed += m;
    }
    Some(total)
}
