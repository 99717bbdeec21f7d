//! Sparse grid keyed by cell coordinates.
//!
//! Missing cells are absent, not zero-valued. There are no bounds: any
//! coordinate is a valid key.

use std::collections::{hash_map, HashMap, HashSet};
use std::hash::Hash;

use glam::DVec2;
use hexweave_topology::HexCoord;

/// Payloads stored against cells of the tiling.
#[derive(Debug, Clone, PartialEq)]
pub struct HexGrid<T> {
    cells: HashMap<HexCoord, T>,
}

impl<T> Default for HexGrid<T> {
    fn default() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }
}

impl<T> HexGrid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
        }
    }

    /// Build from a rectangular array in offset addressing.
    ///
    /// `columns[x][y]` lands at `HexCoord::from_offset(x, y)`; `None`
    /// entries leave the cell absent.
    pub fn from_offset_columns<C, R>(columns: C) -> Self
    where
        C: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<T>>,
    {
        let mut grid = Self::new();
        for (x, column) in columns.into_iter().enumerate() {
            for (y, value) in column.into_iter().enumerate() {
                if let Some(value) = value {
                    grid.insert(HexCoord::from_offset(x as i64, y as i64), value);
                }
            }
        }
        grid
    }

    /// Payload at `coord`, if present.
    pub fn get(&self, coord: HexCoord) -> Option<&T> {
        self.cells.get(&coord)
    }

    /// Mutable payload at `coord`, if present.
    pub fn get_mut(&mut self, coord: HexCoord) -> Option<&mut T> {
        self.cells.get_mut(&coord)
    }

    /// Store a payload, returning the one it replaced.
    pub fn insert(&mut self, coord: HexCoord, value: T) -> Option<T> {
        self.cells.insert(coord, value)
    }

    /// Remove a cell, returning its payload.
    pub fn remove(&mut self, coord: HexCoord) -> Option<T> {
        self.cells.remove(&coord)
    }

    /// Whether `coord` holds a payload.
    pub fn contains(&self, coord: HexCoord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Number of present cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is present.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Present cells and their payloads, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (HexCoord, &T)> {
        self.cells.iter().map(|(coord, value)| (*coord, value))
    }

    /// Present cells with mutable payloads, in arbitrary order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (HexCoord, &mut T)> {
        self.cells.iter_mut().map(|(coord, value)| (*coord, value))
    }

    /// Present cells, in arbitrary order.
    pub fn coords(&self) -> impl Iterator<Item = HexCoord> + '_ {
        self.cells.keys().copied()
    }

    /// Payloads, in arbitrary order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.values()
    }

    /// Distinct payloads found at the given coordinates. Absent cells are skipped.
    pub fn lookup_many<I>(&self, coords: I) -> HashSet<&T>
    where
        I: IntoIterator<Item = HexCoord>,
        T: Eq + Hash,
    {
        coords
            .into_iter()
            .filter_map(|coord| self.cells.get(&coord))
            .collect()
    }

    /// Component-wise min and max of the present cells' world positions.
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut positions = self.cells.keys().map(HexCoord::world_position);
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

impl<T: Default> HexGrid<T> {
    /// A `width` x `height` offset rectangle filled with `T::default()`.
    pub fn with_offset_size(width: usize, height: usize) -> Self {
        let mut grid = Self::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                grid.insert(HexCoord::from_offset(x as i64, y as i64), T::default());
            }
        }
        grid
    }
}

impl<T> FromIterator<(HexCoord, T)> for HexGrid<T> {
    fn from_iter<I: IntoIterator<Item = (HexCoord, T)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(HexCoord, T)> for HexGrid<T> {
    fn extend<I: IntoIterator<Item = (HexCoord, T)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<T> From<HashMap<HexCoord, T>> for HexGrid<T> {
    fn from(cells: HashMap<HexCoord, T>) -> Self {
        Self { cells }
    }
}

impl<T> IntoIterator for HexGrid<T> {
    type Item = (HexCoord, T);
    type IntoIter = hash_map::IntoIter<HexCoord, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a HexGrid<T> {
    type Item = (&'a HexCoord, &'a T);
    type IntoIter = hash_map::Iter<'a, HexCoord, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
