//! Walk through every lab operation on the default front-end inputs

use combilab::prelude::*;
use combilab::graph::generators::protein_chain;
use combilab::utils::{parse_elements, parse_graph, shuffled_sequence};
use combilab::utils::timing::Timer;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Combinatorics Lab ===\n");

    // Unique permutations
    println!("--- Unique Permutations ---");
    let elements = parse_elements("1,2,3,4")?;
    let comparison = compare_permutation_methods(&elements);
    println!("Unique permutations found: {}", comparison.unique_count);
    println!("Backtracking: {:?}", comparison.backtracking_time);
    println!("Generate-all then dedup: {:?}", comparison.dedup_time);

    // Unique combinations
    println!("\n--- Unique Combinations ---");
    let elements = parse_elements("1,2,3,3")?;
    let report = compare_unique_combinations(&elements, 2)?;
    println!("{} combinations in {:?}", report.count, report.elapsed);
    for combo in report.combinations.iter().take(10) {
        println!("  {:?}", combo);
    }

    // Sequence transformation
    println!("\n--- Sequence Transformation ---");
    let start = parse_elements("1,2,3,4")?;
    let target = parse_elements("4,3,2,1")?;
    let steps = transform_sequence(&start, &target)?;
    for step in &steps {
        println!("  {}: {:?}", step.description, step.before);
    }
    println!("Total steps: {}", steps.len());

    // Sorting trace
    println!("\n--- Bubble Sort ---");
    let mut rng = StdRng::seed_from_u64(2024);
    let sequence = shuffled_sequence(6, &mut rng);
    let trace = bubble_sort_steps(&sequence);
    println!("Initial sequence: {:?}", sequence);
    for step in &trace.steps {
        println!("  Step {}: {:?}", step.swaps, step.state);
    }

    // Vertex covers
    println!("\n--- Vertex Cover ---");
    let graph = parse_graph("A,B,C,D", "A,B;B,C;C,D;D,A;A,C")?;
    {
        let _timer = Timer::new("Vertex cover comparison");
        let comparison = compare_cover_strategies(&graph, &SolverConfig::default())?;
        println!("Exact:  {:?}", comparison.exact.as_set());
        println!("Greedy: {:?}", comparison.greedy.as_set());
        println!("Ratio:  {:.2}", comparison.approximation_ratio());
    }

    let chain = protein_chain(7);
    let greedy = GreedyCover::new(TieBreak::InsertionOrder).solve(&chain)?;
    println!("Protein chain P1..P7 greedy cover: {:?}", greedy.as_set());

    println!("\n=== Lab Complete ===");
    Ok(())
}
