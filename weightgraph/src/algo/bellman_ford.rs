use crate::distances::DistanceTable;
use crate::error::{ErrorKind, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::weight::{Distance, PathSum, Weight};

/// Computes the distances from `source` to all vertices of the graph with the Bellman-Ford algorithm.
///
/// Negative weights are allowed, but since the graph is undirected, each negative edge reachable from the source
/// forms a negative cycle by itself (traversing it back and forth).
/// If a negative cycle is reachable from the source, the function fails with `NegativeCycleDetected`
/// and no distances are returned.
///
/// Fails with `UnknownVertex` if the source is not part of the graph,
/// and with `WeightOverflow` if the distance of a reachable vertex is larger than the maximum of `WeightType`.
pub fn shortest_path_general<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    source: Vertex,
) -> Result<DistanceTable<WeightType>> {
    if !graph.contains_vertex(source) {
        bail!(ErrorKind::UnknownVertex(source));
    }

    let mut distances = DistanceTable::new_unreachable(graph.vertices());
    distances.set(source, Distance::zero());
    let edges: Vec<_> = graph.directed_edges().collect();

    // A shortest path without cycles has at most |V| - 1 edges.
    let max_passes = graph.vertex_count() - 1;
    let mut passes = 0;
    while passes < max_passes {
        passes += 1;
        if !relax_edges(&edges, &mut distances)? {
            break;
        }
    }
    trace!(
        "Bellman-Ford from {} converged after {}/{} passes",
        source,
        passes,
        max_passes
    );

    let mut overflowed = None;
    for &(origin, destination, weight) in &edges {
        match extend(distances.distance(origin), weight)? {
            Some(new_distance) if new_distance < distances.distance(destination) => {
                debug!(
                    "Bellman-Ford from {} can still relax edge ({}, {}) of weight {}",
                    source, origin, destination, weight
                );
                bail!(ErrorKind::NegativeCycleDetected);
            }
            Some(_) => {}
            None => {
                if !distances.distance(destination).is_finite() {
                    overflowed = Some(destination);
                }
            }
        }
    }

    // Reached only over paths that are too long for the weight type.
    if let Some(vertex) = overflowed {
        debug!("The distance from {} to {} overflows", source, vertex);
        bail!(ErrorKind::WeightOverflow);
    }

    Ok(distances)
}

/// Relaxes each edge once, in the given order.
/// Returns true if any distance was improved.
fn relax_edges<WeightType: Weight>(
    edges: &[(Vertex, Vertex, WeightType)],
    distances: &mut DistanceTable<WeightType>,
) -> Result<bool> {
    let mut improved = false;
    for &(origin, destination, weight) in edges {
        // Unreachable origins stay unreachable and never improve anything.
        if let Some(new_distance) = extend(distances.distance(origin), weight)? {
            if new_distance < distances.distance(destination) {
                distances.set(destination, new_distance);
                improved = true;
            }
        }
    }
    Ok(improved)
}

/// Extends `distance` by an edge.
/// Returns `None` if the sum is above the maximum of `WeightType`, as such a path never improves a distance.
///
/// A sum below the minimum can only be reached by walking a negative edge back and forth,
/// so it is reported as `NegativeCycleDetected`.
fn extend<WeightType: Weight>(
    distance: Distance<WeightType>,
    weight: WeightType,
) -> Result<Option<Distance<WeightType>>> {
    match distance.extend(weight) {
        PathSum::Distance(distance) => Ok(Some(distance)),
        PathSum::AboveMaximum => Ok(None),
        PathSum::BelowMinimum => bail!(ErrorKind::NegativeCycleDetected),
    }
}

#[cfg(test)]
mod tests {
    use super::shortest_path_general;
    use crate::algo::dijkstra::shortest_path_non_negative;
    use crate::algo::predefined_graphs::{create_path_graph, create_random_graph};
    use crate::error::ErrorKind;
    use crate::graph::WeightedGraph;
    use crate::weight::Distance;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_negative_cycle<T: std::fmt::Debug>(result: crate::error::Result<T>) {
        let error = result.unwrap_err();
        assert!(
            matches!(error.kind(), ErrorKind::NegativeCycleDetected),
            "{}",
            error
        );
    }

    #[test]
    fn test_bellman_ford_mirrored_negative_edge() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 5);
        graph.add_edge(0, 2, -2);
        graph.add_edge(1, 3, 3);
        graph.add_edge(3, 2, 1);

        assert_negative_cycle(shortest_path_general(&graph, 0));
        assert_negative_cycle(shortest_path_general(&graph, 3));
    }

    #[test]
    fn test_bellman_ford_negative_edge_in_other_component() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 4);
        graph.add_edge(1, 2, 1);
        graph.add_edge(7, 8, -3);

        let distances = shortest_path_general(&graph, 0).unwrap();
        assert_eq!(distances.get(2), Some(Distance::Finite(5)));
        assert_eq!(distances.get(7), Some(Distance::Unreachable));
        assert_eq!(distances.get(8), Some(Distance::Unreachable));

        assert_negative_cycle(shortest_path_general(&graph, 8));
    }

    #[test]
    fn test_bellman_ford_self_loops() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 1, 3);
        let distances = shortest_path_general(&graph, 0).unwrap();
        assert_eq!(distances.get(1), Some(Distance::Finite(2)));

        graph.add_edge(1, 1, -1);
        assert_negative_cycle(shortest_path_general(&graph, 0));
    }

    #[test]
    fn test_bellman_ford_negative_cycle_below_minimum() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, -100i8);
        assert_negative_cycle(shortest_path_general(&graph, 0));
        assert_negative_cycle(shortest_path_general(&graph, 1));

        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, i8::MIN);
        assert_negative_cycle(shortest_path_general(&graph, 0));
    }

    #[test]
    fn test_bellman_ford_skips_overflowing_detours() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 200u8);
        graph.add_edge(0, 2, 205);
        graph.add_edge(2, 3, 5);
        graph.add_edge(1, 3, 100);

        let distances = shortest_path_general(&graph, 0).unwrap();
        assert_eq!(distances.get(0), Some(Distance::Finite(0)));
        assert_eq!(distances.get(1), Some(Distance::Finite(200)));
        assert_eq!(distances.get(3), Some(Distance::Finite(210)));
        assert_eq!(distances, shortest_path_non_negative(&graph, 0).unwrap());
    }

    #[test]
    fn test_bellman_ford_overflow() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 100i8);
        graph.add_edge(1, 2, 100);
        let error = shortest_path_general(&graph, 0).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::WeightOverflow));
    }

    #[test]
    fn test_bellman_ford_single_vertex() {
        let mut graph = WeightedGraph::<i32>::new();
        graph.add_vertex(3);
        let distances = shortest_path_general(&graph, 3).unwrap();
        assert_eq!(distances.reachable().collect::<Vec<_>>(), vec![(3, 0)]);
    }

    #[test]
    fn test_bellman_ford_unknown_source() {
        let graph = WeightedGraph::<i32>::new();
        let error = shortest_path_general(&graph, 0).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::UnknownVertex(0)));
    }

    #[test]
    fn test_bellman_ford_long_path_needs_all_passes() {
        let mut graph = WeightedGraph::new();
        create_path_graph(&mut graph, 50, 3i32);
        let distances = shortest_path_general(&graph, 49).unwrap();
        assert_eq!(distances.get(0), Some(Distance::Finite(147)));
        assert_eq!(distances.get(49), Some(Distance::Finite(0)));
    }

    #[test]
    fn test_bellman_ford_agrees_with_dijkstra() {
        let mut random = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut graph = WeightedGraph::new();
            create_random_graph(&mut graph, 25, 40, 0..20i32, &mut random);

            for source in [0, 7, 24] {
                let general = shortest_path_general(&graph, source).unwrap();
                let non_negative = shortest_path_non_negative(&graph, source).unwrap();
                assert_eq!(general, non_negative);
                assert_eq!(general, shortest_path_general(&graph, source).unwrap());
            }
        }
    }

    #[test]
    fn test_bellman_ford_any_reachable_negative_edge_is_a_cycle() {
        let mut random = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut graph = WeightedGraph::new();
            create_path_graph(&mut graph, 10, 4i64);
            create_random_graph(&mut graph, 10, 15, 0..10i64, &mut random);
            graph.add_edge(9, 3, -1);
            assert_negative_cycle(shortest_path_general(&graph, 0));
        }
    }
}
