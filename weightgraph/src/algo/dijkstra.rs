use crate::algo::frontier::Frontier;
use crate::distances::DistanceTable;
use crate::error::{ErrorKind, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::weight::{Distance, PathSum, Weight};
use std::collections::HashSet;

/// Computes the distances from `source` to all vertices of the graph with Dijkstra's algorithm.
///
/// All edge weights must be non-negative.
/// This is not checked, and negative weights produce wrong distances instead of an error.
/// Use [`shortest_path_general`](crate::algo::bellman_ford::shortest_path_general) for graphs with negative weights.
///
/// Fails with `UnknownVertex` if the source is not part of the graph,
/// and with `WeightOverflow` if the distance of a reachable vertex does not fit into `WeightType`.
pub fn shortest_path_non_negative<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    source: Vertex,
) -> Result<DistanceTable<WeightType>> {
    Dijkstra::new().shortest_path_lens(graph, source)
}

/// Data structure for Dijkstra's shortest path algorithm.
///
/// The frontier and the set of finalised vertices are kept between runs to reuse their allocations.
/// This variant of Dijkstra's algorithm supports only computing the length of a shortest path, and not the shortest path itself.
#[derive(Debug, Clone)]
pub struct Dijkstra<WeightType> {
    frontier: Frontier<WeightType>,
    finalised: HashSet<Vertex>,
}

impl<WeightType: Weight> Default for Dijkstra<WeightType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<WeightType: Weight> Dijkstra<WeightType> {
    /// Create the data structures for a new search.
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            finalised: HashSet::new(),
        }
    }

    /// Compute the lengths of the shortest paths from source to all vertices of the graph.
    /// Vertices that are not reachable from the source have distance `Unreachable`.
    pub fn shortest_path_lens(
        &mut self,
        graph: &WeightedGraph<WeightType>,
        source: Vertex,
    ) -> Result<DistanceTable<WeightType>> {
        let result = self.search(graph, source);
        self.frontier.clear();
        self.finalised.clear();
        result
    }

    fn search(
        &mut self,
        graph: &WeightedGraph<WeightType>,
        source: Vertex,
    ) -> Result<DistanceTable<WeightType>> {
        if !graph.contains_vertex(source) {
            bail!(ErrorKind::UnknownVertex(source));
        }

        let mut distances = DistanceTable::new_unreachable(graph.vertices());
        distances.set(source, Distance::zero());
        self.frontier.push(source, Distance::zero());

        let mut stale_entries = 0usize;
        let mut overflowed = Vec::new();
        while let Some((vertex, _)) = self.frontier.pop_min() {
            // Check if the vertex was already finalised
            if !self.finalised.insert(vertex) {
                stale_entries += 1;
                continue;
            }
            let distance = distances.distance(vertex);

            // Relax neighbors
            for (neighbor, weight) in graph.neighbors(vertex) {
                if self.finalised.contains(&neighbor) {
                    continue;
                }

                let new_neighbor_distance = match distance.extend(weight) {
                    PathSum::Distance(new_neighbor_distance) => new_neighbor_distance,
                    // Longer than any representable distance, so it never improves one.
                    PathSum::AboveMaximum => {
                        overflowed.push(neighbor);
                        continue;
                    }
                    PathSum::BelowMinimum => bail!(ErrorKind::WeightOverflow),
                };
                if new_neighbor_distance < distances.distance(neighbor) {
                    distances.set(neighbor, new_neighbor_distance);
                    self.frontier.push(neighbor, new_neighbor_distance);
                }
            }
        }

        debug!(
            "Dijkstra from {} finalised {}/{} vertices and skipped {} stale frontier entries",
            source,
            self.finalised.len(),
            graph.vertex_count(),
            stale_entries
        );

        // Reached only over paths that are too long for the weight type.
        if let Some(&vertex) = overflowed
            .iter()
            .find(|&&vertex| !distances.distance(vertex).is_finite())
        {
            debug!("The distance from {} to {} overflows", source, vertex);
            bail!(ErrorKind::WeightOverflow);
        }
        Ok(distances)
    }
}

#[cfg(test)]
mod tests {
    use super::{shortest_path_non_negative, Dijkstra};
    use crate::algo::predefined_graphs::{create_grid_graph, create_random_graph};
    use crate::error::ErrorKind;
    use crate::graph::WeightedGraph;
    use crate::weight::Distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dijkstra_simple() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 2, 2);
        graph.add_edge(0, 2, 10);

        let distances = shortest_path_non_negative(&graph, 0).unwrap();
        assert_eq!(distances.get(0), Some(Distance::Finite(0)));
        assert_eq!(distances.get(1), Some(Distance::Finite(2)));
        assert_eq!(distances.get(2), Some(Distance::Finite(4)));
        assert_eq!(distances.len(), 3);
    }

    #[test]
    fn test_dijkstra_cycle() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(1, 2, 2u32);
        graph.add_edge(2, 3, 2);
        graph.add_edge(3, 1, 5);

        let distances = shortest_path_non_negative(&graph, 3).unwrap();
        assert_eq!(distances.get(1), Some(Distance::Finite(4)));
        assert_eq!(distances.get(2), Some(Distance::Finite(2)));
        assert_eq!(distances.get(3), Some(Distance::Finite(0)));
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 1);
        graph.add_edge(5, 6, 1);
        graph.add_vertex(9);

        let distances = shortest_path_non_negative(&graph, 0).unwrap();
        assert_eq!(distances.get(1), Some(Distance::Finite(1)));
        assert_eq!(distances.get(5), Some(Distance::Unreachable));
        assert_eq!(distances.get(6), Some(Distance::Unreachable));
        assert_eq!(distances.get(9), Some(Distance::Unreachable));

        let distances = shortest_path_non_negative(&graph, 9).unwrap();
        assert_eq!(distances.reachable().collect::<Vec<_>>(), vec![(9, 0)]);
    }

    #[test]
    fn test_dijkstra_unknown_source() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 1);
        let error = shortest_path_non_negative(&graph, 2).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::UnknownVertex(2)));
    }

    #[test]
    fn test_dijkstra_overflow() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 100i8);
        graph.add_edge(1, 2, 100);
        let error = shortest_path_non_negative(&graph, 0).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::WeightOverflow));
    }

    #[test]
    fn test_dijkstra_skips_overflowing_detours() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 200u8);
        graph.add_edge(0, 2, 205);
        graph.add_edge(2, 3, 5);
        graph.add_edge(1, 3, 100);

        let distances = shortest_path_non_negative(&graph, 0).unwrap();
        assert_eq!(distances.get(1), Some(Distance::Finite(200)));
        assert_eq!(distances.get(2), Some(Distance::Finite(205)));
        assert_eq!(distances.get(3), Some(Distance::Finite(210)));

        let distances = shortest_path_non_negative(&graph, 3).unwrap();
        assert_eq!(distances.get(1), Some(Distance::Finite(100)));
        assert_eq!(distances.get(0), Some(Distance::Finite(210)));
    }

    #[test]
    fn test_dijkstra_reuse() {
        let mut graph = WeightedGraph::new();
        create_grid_graph(&mut graph, 4, 3, 1u64);
        let mut dijkstra = Dijkstra::new();

        let first = dijkstra.shortest_path_lens(&graph, 0).unwrap();
        let second = dijkstra.shortest_path_lens(&graph, 0).unwrap();
        assert_eq!(first, second);
        // The far corner of a 4x3 grid.
        assert_eq!(first.get(11), Some(Distance::Finite(5)));

        let from_corner = dijkstra.shortest_path_lens(&graph, 11).unwrap();
        assert_eq!(from_corner.get(0), Some(Distance::Finite(5)));
        assert_eq!(from_corner.get(11), Some(Distance::Finite(0)));
    }

    #[test]
    fn test_dijkstra_fixed_point_on_random_graphs() {
        let mut random = StdRng::seed_from_u64(0x5eed);
        for _ in 0..20 {
            let mut graph = WeightedGraph::new();
            create_random_graph(&mut graph, 30, 60, 0..50i64, &mut random);

            let distances = shortest_path_non_negative(&graph, 0).unwrap();
            assert_eq!(distances.get(0), Some(Distance::Finite(0)));
            for (origin, destination, weight) in graph.directed_edges() {
                let via_origin = distances
                    .distance(origin)
                    .checked_add_weight(weight)
                    .unwrap();
                assert!(distances.distance(destination) <= via_origin);
            }
        }
    }
}
