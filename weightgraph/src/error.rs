use crate::graph::Vertex;

error_chain! {
    foreign_links {
        Io(std::io::Error)
        /// An IO error.
        ;
    }

    errors {
        /// The given vertex is not part of the graph.
        UnknownVertex(vertex: Vertex) {
            description("the vertex is not part of the graph")
            display("the vertex {} is not part of the graph", vertex)
        }

        /// A cycle of negative total weight is reachable from the source.
        NegativeCycleDetected {
            description("a negative cycle is reachable from the source")
            display("a negative cycle is reachable from the source")
        }

        /// An edge endpoint is not in `[0, vertex_count)`.
        IndexOutOfRange(vertex: Vertex, vertex_count: usize) {
            description("an edge endpoint is out of range")
            display("the edge endpoint {} is out of range for {} vertices", vertex, vertex_count)
        }

        /// A distance matrix for this many vertices cannot be allocated.
        TooManyVertices(vertex_count: usize) {
            description("too many vertices for a distance matrix")
            display("a distance matrix for {} vertices does not fit into memory", vertex_count)
        }

        /// The length of a path does not fit into the weight type.
        WeightOverflow {
            description("the length of a path overflows the weight type")
            display("the length of a path overflows the weight type")
        }
    }
}
