use crate::error::{ErrorKind, Result};
use crate::graph::Vertex;
use crate::weight::{Distance, Weight};
use std::collections::BTreeMap;

/// The distances from a fixed source vertex to all vertices of a graph.
///
/// Vertices that cannot be reached from the source are mapped to [`Distance::Unreachable`].
/// Iteration is in ascending order of vertex ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistanceTable<WeightType> {
    distances: BTreeMap<Vertex, Distance<WeightType>>,
}

impl<WeightType: Weight> DistanceTable<WeightType> {
    /// Creates a table that maps each of the given vertices to `Unreachable`.
    pub fn new_unreachable<Vertices: IntoIterator<Item = Vertex>>(vertices: Vertices) -> Self {
        Self {
            distances: vertices
                .into_iter()
                .map(|vertex| (vertex, Distance::Unreachable))
                .collect(),
        }
    }

    /// Returns the distance of the given vertex, or `None` if the vertex is not part of the table.
    pub fn get(&self, vertex: Vertex) -> Option<Distance<WeightType>> {
        self.distances.get(&vertex).copied()
    }

    /// Returns the distance of the given vertex, treating vertices outside of the table as unreachable.
    #[inline]
    pub fn distance(&self, vertex: Vertex) -> Distance<WeightType> {
        self.get(vertex).unwrap_or(Distance::Unreachable)
    }

    /// Sets the distance of the given vertex.
    #[inline]
    pub fn set(&mut self, vertex: Vertex, distance: Distance<WeightType>) {
        self.distances.insert(vertex, distance);
    }

    /// Returns an iterator over all `(vertex, distance)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Distance<WeightType>)> + '_ {
        self.distances
            .iter()
            .map(|(vertex, distance)| (*vertex, *distance))
    }

    /// Returns an iterator over the vertices with a finite distance together with that distance.
    pub fn reachable(&self) -> impl Iterator<Item = (Vertex, WeightType)> + '_ {
        self.iter()
            .filter_map(|(vertex, distance)| distance.finite().map(|weight| (vertex, weight)))
    }

    /// Returns the amount of vertices in this table.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if this table contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// A dense `n x n` matrix of distances between the vertices `0..n`, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<WeightType> {
    size: usize,
    distances: Vec<Distance<WeightType>>,
}

impl<WeightType: Weight> DistanceMatrix<WeightType> {
    /// Creates a matrix with zeroes on the diagonal and `Unreachable` everywhere else.
    ///
    /// Fails with `TooManyVertices` if the matrix cannot be allocated.
    pub fn new(size: usize) -> Result<Self> {
        let len = size
            .checked_mul(size)
            .ok_or(ErrorKind::TooManyVertices(size))?;
        let mut distances = Vec::new();
        distances
            .try_reserve_exact(len)
            .map_err(|_| ErrorKind::TooManyVertices(size))?;
        distances.resize(len, Distance::Unreachable);
        for i in 0..size {
            distances[i * size + i] = Distance::zero();
        }
        Ok(Self { size, distances })
    }

    /// Returns the amount of rows (and columns) of this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the distance from `from` to `to`.
    /// Panics if any of the two is not smaller than `self.size()`.
    #[inline]
    pub fn get(&self, from: Vertex, to: Vertex) -> Distance<WeightType> {
        self.distances[self.offset(from, to)]
    }

    #[inline]
    pub(crate) fn set(&mut self, from: Vertex, to: Vertex, distance: Distance<WeightType>) {
        let offset = self.offset(from, to);
        self.distances[offset] = distance;
    }

    /// Returns the distances from `from` to all vertices.
    pub fn row(&self, from: Vertex) -> &[Distance<WeightType>] {
        &self.distances[from * self.size..(from + 1) * self.size]
    }

    /// Returns an iterator over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Distance<WeightType>]> + '_ {
        // chunks panics on zero
        self.distances.chunks(self.size.max(1))
    }

    #[inline]
    fn offset(&self, from: Vertex, to: Vertex) -> usize {
        debug_assert!(from < self.size && to < self.size);
        from * self.size + to
    }
}
