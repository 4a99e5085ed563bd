use crate::weight::Weight;
use petgraph::graphmap::UnGraphMap;
use std::iter::FromIterator;

pub use petgraph;

/// The identifier of a vertex. Vertex ids do not need to be contiguous.
pub type Vertex = usize;

/// An undirected graph with integer edge weights.
///
/// Vertices are created lazily by the first edge that touches them.
/// Isolated vertices only exist if they were registered with [`WeightedGraph::add_vertex`].
/// There is at most one edge between two vertices, adding it again overwrites its weight.
///
/// The graph is meant to be built once and then passed by shared reference to the algorithms, none of which mutate it.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph<WeightType> {
    graph: UnGraphMap<Vertex, WeightType>,
}

impl<WeightType: Weight> WeightedGraph<WeightType> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraphMap::new(),
        }
    }

    /// Adds the undirected edge `{origin, destination}` with the given weight.
    /// Self loops and negative weights are accepted.
    ///
    /// Returns the previous weight if the edge existed already.
    pub fn add_edge(
        &mut self,
        origin: Vertex,
        destination: Vertex,
        weight: WeightType,
    ) -> Option<WeightType> {
        self.graph.add_edge(origin, destination, weight)
    }

    /// Registers a vertex without adding any edge to it.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.graph.add_node(vertex);
    }

    /// Returns true if the vertex was touched by an edge or registered explicitly.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.graph.contains_node(vertex)
    }

    /// Returns the amount of vertices in this graph.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the amount of undirected edges in this graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        // Zero vertices must imply zero edges.
        debug_assert!(self.vertex_count() != 0 || self.edge_count() == 0);
        self.vertex_count() == 0
    }

    /// Returns the weight of the edge `{origin, destination}`, or `None` if there is no such edge.
    pub fn weight(&self, origin: Vertex, destination: Vertex) -> Option<WeightType> {
        self.graph.edge_weight(origin, destination).copied()
    }

    /// Returns an iterator over all vertices in the order they were first seen.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph.nodes()
    }

    /// Returns an iterator over the `(neighbor, weight)` pairs of the given vertex, in the order the edges were inserted.
    /// An unknown vertex has no neighbors.
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, WeightType)> + '_ {
        self.graph
            .edges(vertex)
            .map(|(_, neighbor, weight)| (neighbor, *weight))
    }

    /// Returns an iterator over all edges, listing each undirected edge once.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, WeightType)> + '_ {
        self.graph
            .all_edges()
            .map(|(origin, destination, weight)| (origin, destination, *weight))
    }

    /// Returns an iterator over all edges, listing each undirected edge once per direction.
    /// Self loops are listed once.
    pub fn directed_edges(&self) -> impl Iterator<Item = (Vertex, Vertex, WeightType)> + '_ {
        self.vertices().flat_map(move |origin| {
            self.neighbors(origin)
                .map(move |(destination, weight)| (origin, destination, weight))
        })
    }
}

impl<WeightType: Weight> FromIterator<(Vertex, Vertex, WeightType)> for WeightedGraph<WeightType> {
    fn from_iter<T: IntoIterator<Item = (Vertex, Vertex, WeightType)>>(iter: T) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<WeightType: Weight> Extend<(Vertex, Vertex, WeightType)> for WeightedGraph<WeightType> {
    fn extend<T: IntoIterator<Item = (Vertex, Vertex, WeightType)>>(&mut self, iter: T) {
        for (origin, destination, weight) in iter {
            self.add_edge(origin, destination, weight);
        }
    }
}
