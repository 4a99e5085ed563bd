//! Shortest path algorithms on sparse weighted graphs.
//!
//! The crate offers an undirected weighted graph with integer vertex ids ([`WeightedGraph`]),
//! and on top of it Dijkstra's algorithm for non-negative weights, the Bellman-Ford algorithm with negative cycle detection,
//! the Floyd-Warshall algorithm for all pairs shortest paths over a directed edge list, as well as depth and breadth first traversals.
//!
//! Unreachable vertices are never represented by a magic number, but by [`Distance::Unreachable`].
#![warn(missing_docs)]
#![recursion_limit = "1024"]
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;

/// The graph algorithms of this crate.
pub mod algo;
/// Containers for the results of shortest path computations.
pub mod distances;
/// Contains the error types used by this crate.
pub mod error;
/// The weighted graph all single source algorithms operate on.
pub mod graph;
/// Contains functions for reading edge lists and writing shortest path results.
pub mod io;
/// Edge weights and the distances built from them.
pub mod weight;

pub use distances::{DistanceMatrix, DistanceTable};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Vertex, WeightedGraph};
pub use weight::{Distance, PathSum, Weight};
