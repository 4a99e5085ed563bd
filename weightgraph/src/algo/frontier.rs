use crate::graph::Vertex;
use crate::weight::{Distance, Weight};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-priority queue of `(tentative distance, vertex)` pairs.
///
/// The frontier does not support decrease-key.
/// Instead, a vertex whose distance improves is pushed again, and the outdated entry stays in the queue.
/// Callers have to skip entries of vertices that were finalised already when popping them.
/// Entries with equal distance are popped in ascending order of vertex ids.
#[derive(Debug, Clone)]
pub struct Frontier<WeightType> {
    queue: BinaryHeap<Reverse<(Distance<WeightType>, Vertex)>>,
}

impl<WeightType: Weight> Default for Frontier<WeightType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<WeightType: Weight> Frontier<WeightType> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
        }
    }

    /// Adds a candidate distance for the given vertex.
    #[inline]
    pub fn push(&mut self, vertex: Vertex, distance: Distance<WeightType>) {
        self.queue.push(Reverse((distance, vertex)));
    }

    /// Removes and returns the entry with the smallest distance.
    #[inline]
    pub fn pop_min(&mut self) -> Option<(Vertex, Distance<WeightType>)> {
        self.queue
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance))
    }

    /// Returns the amount of entries, including outdated ones.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if there are no entries left.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
