//! Undirected graphs and vertex covers

mod undirected;
mod cover;
pub mod generators;

pub use undirected::{Graph, GraphBuilder};
pub use cover::{
    VertexCover, VertexCoverSolver, ExactCover, GreedyCover, CoverComparison,
    is_vertex_cover, exact_vertex_cover, greedy_vertex_cover, compare_cover_strategies,
};
