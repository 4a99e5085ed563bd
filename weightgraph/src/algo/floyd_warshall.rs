use crate::distances::DistanceMatrix;
use crate::error::{ErrorKind, Result};
use crate::graph::Vertex;
use crate::weight::{Distance, PathSum, Weight};
use std::collections::HashSet;

/// Computes the lengths of the shortest directed paths between all pairs of vertices `0..vertex_count`
/// with the Floyd-Warshall algorithm.
///
/// The edges are directed, i.e. `(origin, destination, weight)` does not imply the reverse edge.
/// If an edge is given multiple times, the last occurrence determines its weight.
/// The distance of each vertex to itself is zero, unless it has a self loop of negative weight.
///
/// Negative cycles are not detected.
/// If there is one, the distances of the vertices on it to themselves become negative, and all distances over it are meaningless.
///
/// Fails with `IndexOutOfRange` if an edge endpoint is not smaller than `vertex_count`,
/// with `TooManyVertices` if the matrix cannot be allocated,
/// and with `WeightOverflow` if a distance does not fit into `WeightType`.
pub fn all_pairs_shortest_paths<WeightType: Weight>(
    vertex_count: usize,
    edges: &[(Vertex, Vertex, WeightType)],
) -> Result<DistanceMatrix<WeightType>> {
    for &(origin, destination, _) in edges {
        for vertex in [origin, destination] {
            if vertex >= vertex_count {
                bail!(ErrorKind::IndexOutOfRange(vertex, vertex_count));
            }
        }
    }

    let mut distances = DistanceMatrix::new(vertex_count)?;
    for &(origin, destination, weight) in edges {
        distances.set(origin, destination, Distance::Finite(weight));
    }
    // The empty path keeps self distances at most zero, even if a self loop with positive weight was given.
    for vertex in 0..vertex_count {
        if distances.get(vertex, vertex) > Distance::zero() {
            distances.set(vertex, vertex, Distance::zero());
        }
    }

    let mut overflowed = HashSet::new();
    // The intermediate vertex must be the outermost loop.
    for k in 0..vertex_count {
        for i in 0..vertex_count {
            let i_to_k = distances.get(i, k);
            if !i_to_k.is_finite() {
                continue;
            }

            for j in 0..vertex_count {
                let via_k = match i_to_k.concatenate(distances.get(k, j)) {
                    PathSum::Distance(via_k) => via_k,
                    PathSum::AboveMaximum => {
                        if !distances.get(i, j).is_finite() {
                            overflowed.insert((i, j));
                        }
                        continue;
                    }
                    PathSum::BelowMinimum => bail!(ErrorKind::WeightOverflow),
                };
                if via_k < distances.get(i, j) {
                    distances.set(i, j, via_k);
                }
            }
        }
    }

    // Connected only over paths that are too long for the weight type.
    if let Some(&(i, j)) = overflowed
        .iter()
        .find(|&&(i, j)| !distances.get(i, j).is_finite())
    {
        debug!("The distance from {} to {} overflows", i, j);
        bail!(ErrorKind::WeightOverflow);
    }

    debug!(
        "Floyd-Warshall computed {}x{} distances from {} edges",
        vertex_count,
        vertex_count,
        edges.len()
    );
    Ok(distances)
}
