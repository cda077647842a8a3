//! Small graph families for demos and tests

use super::Graph;

/// Protein-interaction chain `P1 - P2 - ... - Pn`
pub fn protein_chain(n: usize) -> Graph<String> {
    let labels: Vec<String> = (1..=n).map(|i| format!("P{}", i)).collect();
    let mut graph = Graph::new();
    for label in &labels {
        graph.add_vertex(label.clone());
    }
    for pair in labels.windows(2) {
        graph.insert_edge(pair[0].clone(), pair[1].clone());
    }
    graph
}

/// Cycle on vertices `0..n` (no edges for `n < 3`)
pub fn cycle(n: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n >= 3 {
        for v in 0..n {
            graph.insert_edge(v, (v + 1) % n);
        }
    }
    graph
}

/// Complete graph on vertices `0..n`
pub fn complete(n: usize) -> Graph<usize> {
    let mut graph = Graph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for u in 0..n {
        for v in u + 1..n {
            graph.insert_edge(u, v);
        }
    }
    graph
}
