//! Combinatorial generation and sequence rewriting

mod permutations;
mod combinations;
mod transform;
mod sorting;

pub use permutations::{
    generate_unique_permutations, all_permutations, dedup_permutations,
    compare_permutation_methods, count_unique_permutations, PermutationComparison,
};
pub use combinations::{
    generate_unique_combinations, generate_distinct_combinations, unique_combinations_by_key,
    compare_unique_combinations, index_combinations, CombinationReport, IndexCombinations,
};
pub use transform::{transform_sequence, apply_steps, TransformStep};
pub use sorting::{bubble_sort_steps, SortStep, SortTrace};
