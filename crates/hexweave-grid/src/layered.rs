//! Grid with payloads on cells, sides and corners.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use hexweave_topology::{HexEdge, HexVertex};

use crate::HexGrid;

/// A [`HexGrid`] of cell payloads plus parallel maps for edge and vertex payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredGrid<C, E, V> {
    cells: HexGrid<C>,
    edges: HashMap<HexEdge, E>,
    vertices: HashMap<HexVertex, V>,
}

impl<C, E, V> Default for LayeredGrid<C, E, V> {
    fn default() -> Self {
        Self {
            cells: HexGrid::new(),
            edges: HashMap::new(),
            vertices: HashMap::new(),
        }
    }
}

impl<C, E, V> LayeredGrid<C, E, V> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cell grid with empty edge and vertex layers.
    pub fn from_cells(cells: HexGrid<C>) -> Self {
        Self {
            cells,
            edges: HashMap::new(),
            vertices: HashMap::new(),
        }
    }

    pub fn cells(&self) -> &HexGrid<C> {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut HexGrid<C> {
        &mut self.cells
    }

    pub fn edge(&self, edge: HexEdge) -> Option<&E> {
        self.edges.get(&edge)
    }

    pub fn edge_mut(&mut self, edge: HexEdge) -> Option<&mut E> {
        self.edges.get_mut(&edge)
    }

    /// Store an edge payload, returning the one it replaced.
    pub fn insert_edge(&mut self, edge: HexEdge, value: E) -> Option<E> {
        self.edges.insert(edge, value)
    }

    pub fn remove_edge(&mut self, edge: HexEdge) -> Option<E> {
        self.edges.remove(&edge)
    }

    /// Edges holding a payload, in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = (HexEdge, &E)> {
        self.edges.iter().map(|(edge, value)| (*edge, value))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Distinct payloads found on the given edges.
    pub fn lookup_edges<I>(&self, edges: I) -> HashSet<&E>
    where
        I: IntoIterator<Item = HexEdge>,
        E: Eq + Hash,
    {
        edges
            .into_iter()
            .filter_map(|edge| self.edges.get(&edge))
            .collect()
    }

    pub fn vertex(&self, vertex: HexVertex) -> Option<&V> {
        self.vertices.get(&vertex)
    }

    pub fn vertex_mut(&mut self, vertex: HexVertex) -> Option<&mut V> {
        self.vertices.get_mut(&vertex)
    }

    /// Store a vertex payload, returning the one it replaced.
    pub fn insert_vertex(&mut self, vertex: HexVertex, value: V) -> Option<V> {
        self.vertices.insert(vertex, value)
    }

    pub fn remove_vertex(&mut self, vertex: HexVertex) -> Option<V> {
        self.vertices.remove(&vertex)
    }

    /// Vertices holding a payload, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = (HexVertex, &V)> {
        self.vertices.iter().map(|(vertex, value)| (*vertex, value))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Distinct payloads found on the given vertices.
    pub fn lookup_vertices<I>(&self, vertices: I) -> HashSet<&V>
    where
        I: IntoIterator<Item = HexVertex>,
        V: Eq + Hash,
    {
        vertices
            .into_iter()
            .filter_map(|vertex| self.vertices.get(&vertex))
            .collect()
    }
}
