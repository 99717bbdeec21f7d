//! Canonical hexagon corners.
//!
//! A corner is shared by three cells and can be named from any of them with a
//! local direction (0 = north corner, increasing clockwise). Every naming is
//! rebased onto the single cell for which the corner is either its north
//! corner (inverted-Y) or its north-east corner (Y).

use glam::DVec2;

use crate::layout::{fractional_cube, HORIZONTAL_SPACING, SIDE_LENGTH};
use crate::{HexCoord, HexEdge, Result};

/// Shape of the three sides meeting at a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// One side up, two down: the north corner of the canonical cell.
    InvertedY,
    /// Two sides up, one down: the north-east corner of the canonical cell.
    Y,
}

impl Orientation {
    /// Orientation of the corner at a local direction (already reduced mod 6).
    pub const fn of_direction(direction: i64) -> Self {
        if direction % 2 == 1 {
            Self::Y
        } else {
            Self::InvertedY
        }
    }
}

/// A corner of the tiling.
///
/// Equality and hashing depend only on the canonical (cell, orientation) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexVertex {
    cell: HexCoord,
    orientation: Orientation,
}

impl HexVertex {
    /// Name the corner of `cell` in local `direction` (reduced mod 6).
    ///
    /// Directions 0 and 1 are kept on `cell`; the others are rebased:
    /// - 2 (south-east): north corner of the south-east neighbor
    /// - 3 (south): north-east corner of the south-west neighbor
    /// - 4 (south-west): north corner of the south-west neighbor
    /// - 5 (north-west): north-east corner of the west neighbor
    pub fn new(cell: HexCoord, direction: i64) -> Self {
        let direction = direction.rem_euclid(6);
        let rebase = match direction {
            2 => HexCoord::new(0, 1),
            3 | 4 => HexCoord::new(-1, 1),
            5 => HexCoord::new(-1, 0),
            _ => HexCoord::ORIGIN,
        };

        Self {
            cell: cell + rebase,
            orientation: Orientation::of_direction(direction),
        }
    }

    /// The corner closest to a world point.
    pub fn nearest(point: DVec2) -> Self {
        let (q, r, s) = fractional_cube(point);

        let q = q.floor() as i64;
        let r = r.ceil() as i64;
        let s = s.floor() as i64;

        let direction = if q + r + s == 0 { 0 } else { 1 };
        Self::new(HexCoord::new(q, r), direction)
    }

    /// Canonical cell this corner is stored against.
    pub const fn cell(&self) -> HexCoord {
        self.cell
    }

    /// Canonical orientation.
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Position of the corner on the world plane.
    pub fn world_position(&self) -> DVec2 {
        let offset = match self.orientation {
            Orientation::InvertedY => DVec2::new(0.0, SIDE_LENGTH),
            Orientation::Y => DVec2::new(0.5 * HORIZONTAL_SPACING, 0.5 * SIDE_LENGTH),
        };
        self.cell.world_position() + offset
    }

    /// The three cells meeting at this corner.
    pub fn adjacent_cells(&self) -> [HexCoord; 3] {
        let c = self.cell;
        match self.orientation {
            Orientation::Y => [c, c + HexCoord::new(1, -1), c + HexCoord::new(1, 0)],
            Orientation::InvertedY => [c, c + HexCoord::new(0, -1), c + HexCoord::new(1, -1)],
        }
    }

    /// The three sides ending at this corner.
    pub fn adjacent_edges(&self) -> [HexEdge; 3] {
        let c = self.cell;
        let north_east = c.step(0);
        match self.orientation {
            Orientation::Y => [
                HexEdge::from_direction(c, 0),
                HexEdge::from_direction(c, 1),
                HexEdge::from_direction(north_east, 2),
            ],
            Orientation::InvertedY => [
                HexEdge::from_direction(c, 0),
                HexEdge::from_direction(c, 5),
                HexEdge::from_direction(north_east, 4),
            ],
        }
    }

    /// The three corners one side away.
    pub fn adjacent_vertices(&self) -> [HexVertex; 3] {
        let c = self.cell;
        match self.orientation {
            Orientation::Y => [
                Self::new(c, 0),
                Self::new(c, 2),
                Self::new(c + HexCoord::new(1, 0), 0),
            ],
            Orientation::InvertedY => [
                Self::new(c, 1),
                Self::new(c, 5),
                Self::new(c + HexCoord::new(0, -1), 1),
            ],
        }
    }

    /// The side joining this corner to `other`.
    pub fn edge_to(&self, other: &Self) -> Result<HexEdge> {
        HexEdge::from_vertices(*self, *other)
    }
}

impl std::fmt::Display for HexVertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bit = match self.orientation {
            Orientation::InvertedY => 0,
            Orientation::Y => 1,
        };
        write!(f, "{} {}", self.cell, bit)
    }
}
