use crate::algo::queue::BfsQueue;
use crate::error::{ErrorKind, Result};
use crate::graph::{Vertex, WeightedGraph};
use crate::weight::Weight;
use std::collections::{HashMap, HashSet, VecDeque};

/// A breadth first search backed by a `VecDeque`.
pub type PreOrderVecDequeBfs<'a, WeightType> = PreOrderBfs<'a, WeightType, VecDeque<Vertex>>;

/// Returns the vertices reachable from `start` in depth first preorder.
///
/// Neighbors are visited in the order their edges were inserted.
/// The recursion depth grows with the length of the search path,
/// so for large graphs [`depth_first_search_iterative`] should be preferred.
pub fn depth_first_search<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    start: Vertex,
) -> Result<Vec<Vertex>> {
    ensure_contains_vertex(graph, start)?;
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    depth_first_search_recursively(graph, start, &mut visited, &mut order);
    Ok(order)
}

fn depth_first_search_recursively<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    vertex: Vertex,
    visited: &mut HashSet<Vertex>,
    order: &mut Vec<Vertex>,
) {
    visited.insert(vertex);
    order.push(vertex);

    for (neighbor, _) in graph.neighbors(vertex) {
        if !visited.contains(&neighbor) {
            depth_first_search_recursively(graph, neighbor, visited, order);
        }
    }
}

/// Returns the vertices reachable from `start` in depth first preorder, using an explicit stack instead of recursion.
/// The order is the same as the one of [`depth_first_search`].
pub fn depth_first_search_iterative<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    start: Vertex,
) -> Result<Vec<Vertex>> {
    ensure_contains_vertex(graph, start)?;
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut order = vec![start];
    let mut stack = vec![graph.neighbors(start)];

    while let Some(neighbors) = stack.last_mut() {
        match neighbors.next() {
            Some((neighbor, _)) => {
                if visited.insert(neighbor) {
                    order.push(neighbor);
                    stack.push(graph.neighbors(neighbor));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}

/// Returns the vertices reachable from `start` in breadth first order.
/// Vertices at the same depth are visited in the order they were discovered.
pub fn breadth_first_search<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    start: Vertex,
) -> Result<Vec<Vertex>> {
    Ok(PreOrderVecDequeBfs::new(graph, start)?.collect())
}

fn ensure_contains_vertex<WeightType: Weight>(
    graph: &WeightedGraph<WeightType>,
    vertex: Vertex,
) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(ErrorKind::UnknownVertex(vertex).into())
    }
}

/// A breadth first search that is generic over the queue implementation.
///
/// Vertices are marked as visited when they are added to the queue, so each vertex is queued at most once.
/// Moreover, the traversal computes the preorder rank of each discovered vertex.
pub struct PreOrderBfs<'a, WeightType, Queue> {
    graph: &'a WeightedGraph<WeightType>,
    queue: Queue,
    rank: HashMap<Vertex, usize>,
}

impl<'a, WeightType: Weight, Queue: BfsQueue<Vertex>> PreOrderBfs<'a, WeightType, Queue> {
    /// Creates a new traversal that operates on the given graph starting from the given vertex.
    pub fn new(graph: &'a WeightedGraph<WeightType>, start: Vertex) -> Result<Self> {
        ensure_contains_vertex(graph, start)?;
        let mut traversal = Self {
            graph,
            queue: Queue::default(),
            rank: HashMap::new(),
        };
        traversal.discover(start);
        Ok(traversal)
    }

    /// Resets the traversal to start from the given vertex.
    pub fn reset(&mut self, start: Vertex) -> Result<()> {
        ensure_contains_vertex(self.graph, start)?;
        self.queue.clear();
        self.rank.clear();
        self.discover(start);
        Ok(())
    }

    /// Returns the rank of the given vertex, or `None` if the vertex has not yet been discovered.
    pub fn rank_of(&self, vertex: Vertex) -> Option<usize> {
        self.rank.get(&vertex).copied()
    }

    fn discover(&mut self, vertex: Vertex) {
        let rank = self.rank.len();
        self.rank.insert(vertex, rank);
        self.queue.enqueue(vertex);
    }
}

impl<'a, WeightType: Weight, Queue: BfsQueue<Vertex>> Iterator
    for PreOrderBfs<'a, WeightType, Queue>
{
    type Item = Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.queue.dequeue()?;
        let graph = self.graph;
        for (neighbor, _) in graph.neighbors(first) {
            if !self.rank.contains_key(&neighbor) {
                self.discover(neighbor);
            }
        }
        Some(first)
    }
}
