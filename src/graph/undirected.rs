//! Simple undirected graph over caller-supplied vertex labels

use crate::{LabError, Result};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Serialize, Deserialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An undirected graph without self-loops or parallel edges
///
/// - Vertices keep the order in which they were first added
/// - Each edge is stored once as a normalized `(min, max)` pair, so
///   `(u, v)` and `(v, u)` are the same edge
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "GraphParts<V>",
    bound(deserialize = "V: Ord + Clone + Deserialize<'de>")
)]
pub struct Graph<V: Ord> {
    vertices: Vec<V>,
    edges: BTreeSet<(V, V)>,
}

/// Unchecked serialized form; loading goes through [`Graph::from_parts`]
#[derive(Deserialize)]
struct GraphParts<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Ord + Clone> TryFrom<GraphParts<V>> for Graph<V> {
    type Error = LabError;

    fn try_from(parts: GraphParts<V>) -> Result<Self> {
        Graph::from_parts(parts.vertices, parts.edges)
    }
}

impl<V: Ord + Clone> Graph<V> {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Build a graph from vertices and edges
    ///
    /// Edge endpoints missing from `vertices` are appended after them.
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Graph::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.contains_vertex(&v) {
            return false;
        }
        self.vertices.push(v);
        true
    }

    /// Add an undirected edge, inserting missing endpoints
    ///
    /// Returns false if the edge was already present. Self-loops are
    /// rejected.
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool> {
        if u == v {
            return Err(LabError::InvalidArgument(
                "Self-loops not allowed".to_string(),
            ));
        }
        Ok(self.insert_edge(u, v))
    }

    pub(crate) fn insert_edge(&mut self, u: V, v: V) -> bool {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.edges.insert(normalize(u, v))
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Edges as normalized `(min, max)` pairs
    pub fn edges(&self) -> impl Iterator<Item = &(V, V)> + '_ {
        self.edges.iter()
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if a vertex is present
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Check if the undirected edge `u - v` is present
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        let key = if u <= v {
            (u.clone(), v.clone())
        } else {
            (v.clone(), u.clone())
        };
        self.edges.contains(&key)
    }

    /// Neighbors of `v`, in edge order
    pub fn neighbors<'a>(&'a self, v: &'a V) -> impl Iterator<Item = &'a V> + 'a {
        self.edges.iter().filter_map(move |(a, b)| {
            if a == v {
                Some(b)
            } else if b == v {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Number of edges incident to `v`
    pub fn degree(&self, v: &V) -> usize {
        self.neighbors(v).count()
    }

    /// Degree of every vertex with at least one edge
    pub fn degrees(&self) -> BTreeMap<&V, usize> {
        let mut degrees = BTreeMap::new();
        for (u, v) in &self.edges {
            *degrees.entry(u).or_insert(0) += 1;
            *degrees.entry(v).or_insert(0) += 1;
        }
        degrees
    }

    /// Remove a vertex and every edge touching it
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        let Some(position) = self.vertices.iter().position(|x| x == v) else {
            return false;
        };
        self.vertices.remove(position);
        self.edges.retain(|(a, b)| a != v && b != v);
        true
    }

    /// Edges as pairs of positions into [`Graph::vertices`]
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        let position: BTreeMap<&V, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();

        self.edges
            .iter()
            .filter_map(|(u, v)| Some((*position.get(u)?, *position.get(v)?)))
            .collect()
    }

    /// Convert to a petgraph graph, node indices following vertex order
    pub fn to_petgraph(&self) -> UnGraph<V, ()> {
        let mut graph = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        let mut index: BTreeMap<&V, NodeIndex> = BTreeMap::new();
        for v in &self.vertices {
            index.insert(v, graph.add_node(v.clone()));
        }
        for (u, v) in &self.edges {
            graph.add_edge(index[u], index[v], ());
        }
        graph
    }

    /// Build from a petgraph graph; repeated labels are merged
    pub fn from_petgraph<E>(graph: &UnGraph<V, E>) -> Result<Self> {
        let mut result = Graph::new();
        for node in graph.node_indices() {
            result.add_vertex(graph[node].clone());
        }
        for edge in graph.edge_references() {
            result.add_edge(graph[edge.source()].clone(), graph[edge.target()].clone())?;
        }
        Ok(result)
    }
}

fn normalize<V: Ord>(u: V, v: V) -> (V, V) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

impl<V: Ord + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(V={:?}, E=[", self.vertices)?;
        for (i, (u, v)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}-{:?}", u, v)?;
        }
        write!(f, "])")
    }
}

/// Builder for constructing graphs incrementally
///
/// Errors (self-loops) are reported once, by [`GraphBuilder::build`].
pub struct GraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Ord + Clone> GraphBuilder<V> {
    /// Create a new empty builder
    pub fn new() -> Self {
        GraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex
    pub fn vertex(&mut self, v: V) -> &mut Self {
        self.vertices.push(v);
        self
    }

    /// Add an edge
    pub fn edge(&mut self, u: V, v: V) -> &mut Self {
        self.edges.push((u, v));
        self
    }

    /// Build the graph
    pub fn build(&self) -> Result<Graph<V>> {
        Graph::from_parts(self.vertices.iter().cloned(), self.edges.iter().cloned())
    }
}

impl<V: Ord + Clone> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
