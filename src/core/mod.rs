//! Configuration shared by the solvers

mod config;

pub use config::{SolverConfig, TieBreak};
