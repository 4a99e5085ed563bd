use crate::graph::{Vertex, WeightedGraph};
use crate::weight::Weight;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::ops::Range;

/// Adds a path `0 - 1 - ... - (vertex_count - 1)` to the given graph, where each edge has the given weight.
/// A vertex count of zero adds nothing, a vertex count of one just the vertex `0`.
pub fn create_path_graph<WeightType: Weight>(
    graph: &mut WeightedGraph<WeightType>,
    vertex_count: usize,
    weight: WeightType,
) {
    if vertex_count == 0 {
        return;
    }

    graph.add_vertex(0);
    for vertex in 1..vertex_count {
        graph.add_edge(vertex - 1, vertex, weight);
    }
}

/// Adds a `width x height` grid to the given graph, where each edge has the given weight.
/// The vertex in column `x` and row `y` gets the id `y * width + x`.
pub fn create_grid_graph<WeightType: Weight>(
    graph: &mut WeightedGraph<WeightType>,
    width: usize,
    height: usize,
    weight: WeightType,
) {
    for y in 0..height {
        for x in 0..width {
            let vertex: Vertex = y * width + x;
            graph.add_vertex(vertex);
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, weight);
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, weight);
            }
        }
    }
}

/// Adds the vertices `0..vertex_count` and `edge_amount` new random edges between them to the given graph.
/// Edge weights are drawn uniformly from `weights`, which must not be empty.
/// No self loops are created, and existing edges are never overwritten.
pub fn create_random_graph<WeightType: Weight + SampleUniform, Random: Rng>(
    graph: &mut WeightedGraph<WeightType>,
    vertex_count: usize,
    edge_amount: usize,
    weights: Range<WeightType>,
    random: &mut Random,
) {
    if vertex_count == 0 {
        return;
    }

    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }

    let existing_edge_amount = graph
        .edges()
        .filter(|&(origin, destination, _)| {
            origin != destination && origin < vertex_count && destination < vertex_count
        })
        .count();
    debug_assert!(
        existing_edge_amount + edge_amount <= vertex_count * (vertex_count - 1) / 2,
        "cannot add {} edges to {} vertices that already have {} edges",
        edge_amount,
        vertex_count,
        existing_edge_amount,
    );

    let mut added_edge_amount = 0;
    while added_edge_amount < edge_amount {
        let origin = random.gen_range(0..vertex_count);
        let destination = random.gen_range(0..vertex_count);

        if origin != destination && graph.weight(origin, destination).is_none() {
            graph.add_edge(origin, destination, random.gen_range(weights.clone()));
            added_edge_amount += 1;
        }
    }
}
