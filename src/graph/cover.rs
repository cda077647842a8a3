//! Vertex covers: an exact baseline and a greedy approximation

use super::Graph;
use crate::combinatorics::index_combinations;
use crate::core::{SolverConfig, TieBreak};
use crate::utils::timing::timed;
use crate::{LabError, Result};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// A set of vertices touching every edge of some graph
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexCover<V: Ord> {
    vertices: BTreeSet<V>,
}

impl<V: Ord> VertexCover<V> {
    /// Create the empty cover
    pub fn empty() -> Self {
        VertexCover {
            vertices: BTreeSet::new(),
        }
    }

    /// Number of vertices in the cover
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the cover is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if `v` belongs to the cover
    pub fn contains(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Iterate over the vertices in label order
    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, V> {
        self.vertices.iter()
    }

    /// The vertices as a set
    pub fn as_set(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// Take the underlying set
    pub fn into_inner(self) -> BTreeSet<V> {
        self.vertices
    }
}

impl<V: Ord + Clone> VertexCover<V> {
    /// Whether every edge of `graph` has an endpoint in this cover
    pub fn covers(&self, graph: &Graph<V>) -> bool {
        is_vertex_cover(graph, &self.vertices)
    }
}

impl<V: Ord> FromIterator<V> for VertexCover<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        VertexCover {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl<V: Ord> IntoIterator for VertexCover<V> {
    type Item = V;
    type IntoIter = std::collections::btree_set::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

/// Check whether `subset` touches every edge of `graph`
pub fn is_vertex_cover<V: Ord + Clone>(graph: &Graph<V>, subset: &BTreeSet<V>) -> bool {
    graph
        .edges()
        .all(|(u, v)| subset.contains(u) || subset.contains(v))
}

/// Trait for vertex-cover strategies
pub trait VertexCoverSolver<V: Ord> {
    /// Short name for reports
    fn name(&self) -> &'static str;

    /// Compute a cover of `graph` without modifying it
    fn solve(&self, graph: &Graph<V>) -> Result<VertexCover<V>>;
}

/// Minimum vertex cover by exhaustive search
///
/// Subsets are tried by increasing size `k = 1, 2, ...`, each size in
/// lexicographic order over vertex insertion positions, and the first
/// subset covering every edge wins. The result is therefore a minimum cover,
/// and deterministic for a given vertex order. Cost is exponential in the
/// number of vertices; `max_subsets` and `deadline` in [`SolverConfig`] bound
/// it.
#[derive(Clone, Debug, Default)]
pub struct ExactCover {
    config: SolverConfig,
}

impl ExactCover {
    /// Create solver with the given configuration
    pub fn new(config: SolverConfig) -> Self {
        ExactCover { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn check_deadline(&self, started: Instant) -> Result<()> {
        if let Some(deadline) = self.config.deadline {
            if started.elapsed() >= deadline {
                tracing::warn!(?deadline, "exact vertex cover aborted at deadline");
                return Err(LabError::DeadlineExceeded(deadline));
            }
        }
        Ok(())
    }

    /// Search the subsets of size `k` in batches of `parallel_threshold`
    ///
    /// Full batches are tested in parallel; `find_first` keeps the result
    /// equal to the sequential one.
    fn search_level(
        &self,
        n: usize,
        k: usize,
        edges: &[(usize, usize)],
        tested: &mut u64,
        started: Instant,
    ) -> Result<Option<Vec<usize>>> {
        let batch_size = self.config.parallel_threshold;
        let mut candidates = index_combinations(n, k).peekable();

        while candidates.peek().is_some() {
            self.check_deadline(started)?;

            let budget = match self.config.max_subsets {
                Some(limit) if *tested >= limit => {
                    tracing::warn!(limit, k, "exact vertex cover hit its search limit");
                    return Err(LabError::SearchLimitExceeded { limit });
                }
                Some(limit) => ((limit - *tested) as usize).min(batch_size),
                None => batch_size,
            };

            let batch: Vec<Vec<usize>> = candidates.by_ref().take(budget).collect();
            *tested += batch.len() as u64;

            let hit = if batch.len() >= batch_size && batch_size > 1 {
                batch.into_par_iter().find_first(|s| covers_indices(s, edges))
            } else {
                batch.into_iter().find(|s| covers_indices(s, edges))
            };
            if hit.is_some() {
                return Ok(hit);
            }
        }
        Ok(None)
    }
}

/// Whether the sorted index set `subset` touches every edge
fn covers_indices(subset: &[usize], edges: &[(usize, usize)]) -> bool {
    edges
        .iter()
        .all(|(u, v)| subset.binary_search(u).is_ok() || subset.binary_search(v).is_ok())
}

impl<V: Ord + Clone> VertexCoverSolver<V> for ExactCover {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn solve(&self, graph: &Graph<V>) -> Result<VertexCover<V>> {
        self.config.validate()?;

        let edges = graph.edge_indices();
        if edges.is_empty() {
            return Ok(VertexCover::empty());
        }

        let n = graph.vertex_count();
        let started = Instant::now();
        let mut tested = 0u64;
        for k in 1..=n {
            let found = self.search_level(n, k, &edges, &mut tested, started)?;
            tracing::trace!(k, tested, found = found.is_some(), "exact cover level searched");

            if let Some(indices) = found {
                let vertices = graph.vertices();
                let cover: VertexCover<V> = indices.iter().map(|&i| vertices[i].clone()).collect();
                tracing::debug!(
                    vertices = n,
                    edges = edges.len(),
                    cover = cover.len(),
                    tested,
                    "exact vertex cover found"
                );
                return Ok(cover);
            }
        }

        // The full vertex set covers every edge, so the loop always returns
        Ok(graph.vertices().iter().cloned().collect())
    }
}

/// Greedy maximum-degree vertex cover
///
/// Repeatedly takes the vertex with the most uncovered edges, then drops it
/// and its edges from a private working copy, until no edge is left. Always
/// a valid cover, not necessarily a minimum one. Equal degrees are settled
/// by the configured [`TieBreak`].
#[derive(Clone, Debug, Default)]
pub struct GreedyCover {
    tie_break: TieBreak,
}

impl GreedyCover {
    /// Create solver with the given tie-break rule
    pub fn new(tie_break: TieBreak) -> Self {
        GreedyCover { tie_break }
    }

    /// Create solver using the tie-break rule of `config`
    pub fn from_config(config: &SolverConfig) -> Self {
        Self::new(config.tie_break)
    }

    /// Vertex of maximum degree in `graph`, `None` when there are no edges
    fn pick<V: Ord + Clone>(&self, graph: &Graph<V>) -> Option<V> {
        let degrees = graph.degrees();
        let ordered: Vec<(&V, usize)> = match self.tie_break {
            TieBreak::LowestLabel => degrees.iter().map(|(&v, &d)| (v, d)).collect(),
            TieBreak::InsertionOrder => graph
                .vertices()
                .iter()
                .filter_map(|v| degrees.get(v).map(|&d| (v, d)))
                .collect(),
        };

        // Strict comparison: the first candidate in tie-break order wins
        let mut best: Option<(&V, usize)> = None;
        for (v, degree) in ordered {
            if best.map_or(true, |(_, d)| degree > d) {
                best = Some((v, degree));
            }
        }
        best.map(|(v, _)| v.clone())
    }

    fn run<V: Ord + Clone>(&self, graph: &Graph<V>) -> VertexCover<V> {
        let mut working = graph.clone();
        let mut cover = BTreeSet::new();

        while let Some(v) = self.pick(&working) {
            tracing::trace!(remaining_edges = working.edge_count(), "greedy pick");
            working.remove_vertex(&v);
            cover.insert(v);
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            cover = cover.len(),
            "greedy vertex cover found"
        );
        VertexCover { vertices: cover }
    }
}

impl<V: Ord + Clone> VertexCoverSolver<V> for GreedyCover {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, graph: &Graph<V>) -> Result<VertexCover<V>> {
        Ok(self.run(graph))
    }
}

/// Minimum vertex cover with the default configuration
pub fn exact_vertex_cover<V: Ord + Clone>(graph: &Graph<V>) -> Result<VertexCover<V>> {
    ExactCover::default().solve(graph)
}

/// Greedy vertex cover with the lowest-label tie-break
pub fn greedy_vertex_cover<V: Ord + Clone>(graph: &Graph<V>) -> VertexCover<V> {
    GreedyCover::default().run(graph)
}

/// Exact and greedy covers of the same graph with their timings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverComparison<V: Ord> {
    /// Minimum cover
    pub exact: VertexCover<V>,
    /// Greedy cover
    pub greedy: VertexCover<V>,
    /// Wall time of the exact search
    pub exact_time: Duration,
    /// Wall time of the greedy search
    pub greedy_time: Duration,
}

impl<V: Ord> CoverComparison<V> {
    /// Greedy size over exact size; 1.0 for graphs without edges
    pub fn approximation_ratio(&self) -> f64 {
        if self.exact.is_empty() {
            return 1.0;
        }
        self.greedy.len() as f64 / self.exact.len() as f64
    }
}

/// Run both strategies on `graph`
pub fn compare_cover_strategies<V: Ord + Clone>(
    graph: &Graph<V>,
    config: &SolverConfig,
) -> Result<CoverComparison<V>> {
    let (exact, exact_time) = timed(|| ExactCover::new(config.clone()).solve(graph));
    let (greedy, greedy_time) = timed(|| GreedyCover::from_config(config).solve(graph));
    Ok(CoverComparison {
        exact: exact?,
        greedy: greedy?,
        exact_time,
        greedy_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn triangle() -> Graph<char> {
        GraphBuilder::new()
            .edge('A', 'B')
            .edge('B', 'C')
            .edge('C', 'A')
            .build()
            .unwrap()
    }

    fn star(leaves: usize) -> Graph<usize> {
        Graph::from_parts(0..=leaves, (1..=leaves).map(|i| (0, i))).unwrap()
    }

    #[test]
    fn test_exact_triangle() {
        let cover = exact_vertex_cover(&triangle()).unwrap();
        assert_eq!(cover.len(), 2);
        assert!(cover.covers(&triangle()));
        // First size-2 subset in vertex order
        assert_eq!(cover.into_inner(), BTreeSet::from(['A', 'B']));
    }

    #[test]
    fn test_exact_star() {
        let cover = exact_vertex_cover(&star(6)).unwrap();
        assert_eq!(cover.into_inner(), BTreeSet::from([0]));
    }

    #[test]
    fn test_no_edges() {
        let g = Graph::from_parts(vec![1, 2, 3], Vec::new()).unwrap();
        assert!(exact_vertex_cover(&g).unwrap().is_empty());
        assert!(greedy_vertex_cover(&g).is_empty());
        assert!(exact_vertex_cover(&Graph::<u8>::new()).unwrap().is_empty());
    }

    #[test]
    fn test_greedy_leaves_input_intact() {
        let g = star(4);
        let before = g.clone();
        let cover = GreedyCover::default().solve(&g).unwrap();
        assert_eq!(g, before);
        assert_eq!(cover.len(), 1);
        assert!(cover.contains(&0));
    }

    #[test]
    fn test_greedy_tie_breaks() {
        // Path c - b - a - d: b and a both have degree 2
        let g = Graph::from_parts(vec!['c', 'b', 'a', 'd'], vec![('c', 'b'), ('b', 'a'), ('a', 'd')])
            .unwrap();

        let lowest = GreedyCover::new(TieBreak::LowestLabel).solve(&g).unwrap();
        assert_eq!(lowest.into_inner(), BTreeSet::from(['a', 'b']));

        let inserted = GreedyCover::new(TieBreak::InsertionOrder).solve(&g).unwrap();
        assert!(inserted.contains(&'b'));
        assert!(inserted.covers(&g));
        assert_eq!(inserted.len(), 2);
    }

    #[test]
    fn test_greedy_not_smaller_than_exact() {
        let edges = vec![
            ("t1", "b1"), ("t1", "b2"),
            ("t2", "b3"), ("t2", "b4"),
            ("t3", "b5"), ("t3", "b6"),
            ("x", "b1"), ("x", "b3"), ("x", "b5"),
            ("y", "b2"), ("y", "b4"), ("y", "b6"),
        ];
        let g = Graph::from_parts(Vec::new(), edges).unwrap();
        let exact = exact_vertex_cover(&g).unwrap();
        let greedy = greedy_vertex_cover(&g);
        assert_eq!(exact.len(), 5);
        assert!(greedy.covers(&g));
        assert!(greedy.len() >= exact.len());
    }

    #[test]
    fn test_search_limit() {
        let solver = ExactCover::new(SolverConfig::bounded(2));
        assert!(matches!(
            solver.solve(&triangle()),
            Err(LabError::SearchLimitExceeded { limit: 2 })
        ));

        let roomy = ExactCover::new(SolverConfig::bounded(100));
        assert_eq!(roomy.solve(&triangle()).unwrap().len(), 2);
    }

    #[test]
    fn test_deadline() {
        let solver = ExactCover::new(SolverConfig::default().with_deadline(Duration::ZERO));
        assert!(matches!(
            solver.solve(&star(8)),
            Err(LabError::DeadlineExceeded(_))
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut edges = Vec::new();
        for i in 0..12usize {
            edges.push((i, (i + 1) % 12));
            edges.push((i, (i + 5) % 12));
        }
        let g = Graph::from_parts(0..12, edges).unwrap();

        let sequential = ExactCover::default().solve(&g).unwrap();
        let mut config = SolverConfig::default();
        config.parallel_threshold = 8;
        let parallel = ExactCover::new(config).solve(&g).unwrap();

        assert_eq!(sequential, parallel);
        assert!(parallel.covers(&g));
    }

    #[test]
    fn test_compare_strategies() {
        let comparison = compare_cover_strategies(&triangle(), &SolverConfig::default()).unwrap();
        assert_eq!(comparison.exact.len(), 2);
        assert!(comparison.greedy.covers(&triangle()));
        assert!(comparison.approximation_ratio() >= 1.0);
    }
}
