/// The Bellman-Ford shortest path algorithm with negative cycle detection.
pub mod bellman_ford;
/// Dijkstra's shortest path algorithm.
pub mod dijkstra;
/// The Floyd-Warshall all pairs shortest path algorithm.
pub mod floyd_warshall;
/// The min-priority queue driving Dijkstra's algorithm.
pub mod frontier;
/// Algorithms to create certain parameterisable weighted graph classes, like paths and grids.
pub mod predefined_graphs;
/// The queue abstraction of breadth first search, implemented for the standard library deques.
pub mod queue;
/// Depth and breadth first graph traversals.
pub mod traversal;
