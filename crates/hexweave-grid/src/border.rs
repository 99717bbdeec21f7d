//! Border extraction.
//!
//! Traces the boundary of a territory (a subset of present cells) as chains
//! of corners. Islands, holes and disjoint regions each yield their own
//! chain. A cell is inside only if it is in the territory and present in the
//! grid, so truncated grid edges count as boundary.
//!
//! # Walk
//!
//! A side is a border side when exactly one of its two cells is inside. Every
//! corner touching an inside cell and an outside cell has exactly two border
//! sides, so a walk that repeatedly takes the first unvisited corner across a
//! border side traces one boundary component. Neighbor order follows
//! [`HexVertex::adjacent_vertices`]; start point and direction are
//! deterministic but carry no meaning.

use std::collections::HashSet;

use hexweave_topology::{HexCoord, HexEdge, HexVertex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{HexGrid, Result};

/// One connected component of a territory boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderChain {
    /// Corners in walk order.
    pub vertices: Vec<HexVertex>,
    /// Whether the last corner connects back to the first across a border side.
    pub closed: bool,
}

impl BorderChain {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sides between consecutive corners, including the closing side.
    ///
    /// Fails if two consecutive corners do not share a side, which only
    /// happens for chains built or deserialized by hand.
    pub fn edges(&self) -> Result<Vec<HexEdge>> {
        let mut edges = self
            .vertices
            .windows(2)
            .map(|pair| HexEdge::from_vertices(pair[0], pair[1]))
            .collect::<hexweave_topology::Result<Vec<_>>>()?;

        if self.closed {
            if let (Some(last), Some(first)) = (self.vertices.last(), self.vertices.first()) {
                edges.push(HexEdge::from_vertices(*last, *first)?);
            }
        }
        Ok(edges)
    }
}

/// Membership test shared by the cell, corner and side predicates.
struct Territory<'a, T> {
    grid: &'a HexGrid<T>,
    cells: &'a HashSet<HexCoord>,
}

impl<T> Territory<'_, T> {
    fn inside(&self, cell: HexCoord) -> bool {
        self.cells.contains(&cell) && self.grid.contains(cell)
    }

    fn is_border_cell(&self, cell: HexCoord) -> bool {
        self.inside(cell) && cell.adjacent().iter().any(|n| !self.inside(*n))
    }

    fn is_border_vertex(&self, vertex: HexVertex) -> bool {
        vertex.adjacent_cells().iter().any(|c| !self.inside(*c))
    }

    fn is_border_edge(&self, edge: HexEdge) -> bool {
        let [a, b] = edge.cells();
        self.inside(a) != self.inside(b)
    }

    fn crosses_border(&self, from: HexVertex, to: HexVertex) -> bool {
        from.edge_to(&to).is_ok_and(|edge| self.is_border_edge(edge))
    }

    fn walk(&self, start: HexVertex, visited: &mut HashSet<HexVertex>) -> BorderChain {
        visited.insert(start);
        let mut vertices = vec![start];
        let mut current = start;

        while let Some(next) = current
            .adjacent_vertices()
            .into_iter()
            .find(|n| !visited.contains(n) && self.crosses_border(current, *n))
        {
            visited.insert(next);
            vertices.push(next);
            current = next;
        }

        let closed = vertices.len() > 2 && self.crosses_border(current, start);
        BorderChain { vertices, closed }
    }
}

impl<T> HexGrid<T> {
    /// Boundary chains of `territory`, one per connected boundary component.
    ///
    /// Cells of `territory` absent from the grid are treated as outside. A
    /// territory with no inside/outside contrast yields no chains.
    pub fn extract_borders(&self, territory: &HashSet<HexCoord>) -> Vec<BorderChain> {
        let territory = Territory {
            grid: self,
            cells: territory,
        };

        let mut border_cells: Vec<HexCoord> = territory
            .cells
            .iter()
            .copied()
            .filter(|c| territory.is_border_cell(*c))
            .collect();
        border_cells.sort_unstable();

        let mut visited = HashSet::new();
        let mut chains = Vec::new();

        for cell in &border_cells {
            for direction in 0..6 {
                let start = HexVertex::new(*cell, direction);
                if visited.contains(&start) || !territory.is_border_vertex(start) {
                    continue;
                }
                chains.push(territory.walk(start, &mut visited));
            }
        }

        debug!(
            territory = territory.cells.len(),
            border_cells = border_cells.len(),
            chains = chains.len(),
            "extracted borders"
        );
        chains
    }

    /// Boundary chains of the present cells matching `predicate`.
    ///
    /// The predicate is evaluated once per present cell.
    pub fn extract_borders_where<F>(&self, mut predicate: F) -> Vec<BorderChain>
    where
        F: FnMut(HexCoord, &T) -> bool,
    {
        let territory: HashSet<HexCoord> = self
            .iter()
            .filter(|(coord, value)| predicate(*coord, *value))
            .map(|(coord, _)| coord)
            .collect();
        self.extract_borders(&territory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(radius: u32) -> HexGrid<()> {
        let mut grid: HexGrid<()> = HexCoord::ORIGIN
            .neighbors(radius)
            .into_iter()
            .map(|c| (c, ()))
            .collect();
        grid.insert(HexCoord::ORIGIN, ());
        grid
    }

    fn all_cells<T>(grid: &HexGrid<T>) -> HashSet<HexCoord> {
        grid.coords().collect()
    }

    #[test]
    fn single_cell_is_one_hexagon() {
        let grid = disc(2);
        let territory: HashSet<_> = [HexCoord::new(1, -1)].into_iter().collect();

        let chains = grid.extract_borders(&territory);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 6);
        assert!(chains[0].closed);

        let corners: HashSet<_> = (0..6).map(|d| HexVertex::new(HexCoord::new(1, -1), d)).collect();
        let traced: HashSet<_> = chains[0].vertices.iter().copied().collect();
        assert_eq!(traced, corners);
    }

    #[test]
    fn chain_edges_are_border_sides() -> Result<()> {
        let grid = disc(1);
        let territory: HashSet<_> = [HexCoord::ORIGIN].into_iter().collect();
        let chains = grid.extract_borders(&territory);

        let edges: HashSet<_> = chains[0].edges()?.into_iter().collect();
        let expected: HashSet<_> = (0..6)
            .map(|d| HexEdge::from_direction(HexCoord::ORIGIN, d))
            .collect();
        assert_eq!(edges, expected);
        Ok(())
    }

    #[test]
    fn broken_chain_edges_are_errors() {
        let gap = BorderChain {
            vertices: vec![
                HexVertex::new(HexCoord::ORIGIN, 0),
                HexVertex::new(HexCoord::ORIGIN, 1),
                HexVertex::new(HexCoord::ORIGIN, 3),
            ],
            closed: false,
        };
        assert!(matches!(gap.edges(), Err(crate::Error::Topology(_))));

        let unclosable = BorderChain {
            vertices: (0..3).map(|d| HexVertex::new(HexCoord::ORIGIN, d)).collect(),
            closed: true,
        };
        assert!(unclosable.edges().is_err());
        assert_eq!(
            BorderChain { closed: false, ..unclosable }.edges().map(|e| e.len()).ok(),
            Some(2)
        );
    }

    #[test]
    fn empty_territory_has_no_chains() {
        let grid = disc(2);
        assert!(grid.extract_borders(&HashSet::new()).is_empty());
    }

    #[test]
    fn cells_missing_from_grid_are_outside() {
        let grid = disc(1);
        let territory: HashSet<_> = [HexCoord::new(5, 5)].into_iter().collect();
        assert!(grid.extract_borders(&territory).is_empty());
    }

    #[test]
    fn whole_grid_is_bounded_by_truncation() {
        let grid = disc(1);
        let chains = grid.extract_borders(&all_cells(&grid));
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 18);
        assert!(chains[0].closed);
    }

    #[test]
    fn predicate_form_matches_set_form() {
        let mut grid: HexGrid<bool> = HexGrid::new();
        for c in HexCoord::ORIGIN.neighbors(3) {
            grid.insert(c, c.q >= 0);
        }
        grid.insert(HexCoord::ORIGIN, true);

        let mut calls = 0;
        let by_predicate = grid.extract_borders_where(|_, owned| {
            calls += 1;
            *owned
        });
        assert_eq!(calls, grid.len());

        let territory: HashSet<_> = grid.iter().filter(|(_, v)| **v).map(|(c, _)| c).collect();
        assert_eq!(by_predicate, grid.extract_borders(&territory));
    }

    #[test]
    fn output_is_reproducible() {
        let grid = disc(3);
        let territory: HashSet<_> = grid.coords().filter(|c| c.r != 0).collect();
        assert_eq!(grid.extract_borders(&territory), grid.extract_borders(&territory));
    }
}
