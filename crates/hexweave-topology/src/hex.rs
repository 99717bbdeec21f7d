//! Hexagonal cell coordinates using axial coordinates.
//!
//! Axial coordinates use two axes (q, r) at 60 degrees, with an implicit
//! third axis s = -q - r. Storing two values keeps the type small while the
//! cube form (q, r, s) is used for distance, rotation and rounding.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::neighbors::NeighborOffsets;

/// A cell of the hexagonal tiling.
///
/// Equality and hashing depend only on (q, r).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    /// First axial coordinate
    pub q: i64,
    /// Second axial coordinate
    pub r: i64,
}

impl HexCoord {
    /// Origin of the coordinate system.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// The six distance-1 offsets, clockwise from the north-east neighbor.
    ///
    /// Edge and vertex direction indices are defined against this table;
    /// its order must never change.
    pub const DIRECTIONS: [Self; 6] = [
        Self { q: 1, r: -1 }, // North-east
        Self { q: 1, r: 0 },  // East
        Self { q: 0, r: 1 },  // South-east
        Self { q: -1, r: 1 }, // South-west
        Self { q: -1, r: 0 }, // West
        Self { q: 0, r: -1 }, // North-west
    ];

    /// Create a new coordinate.
    pub const fn new(q: i64, r: i64) -> Self {
        Self { q, r }
    }

    /// Compute the implicit third axis: s = -q - r.
    pub const fn s(&self) -> i64 {
        -self.q - self.r
    }

    /// Distance from the origin: (|q| + |r| + |s|) / 2.
    pub fn magnitude(&self) -> u64 {
        (self.q.unsigned_abs() + self.r.unsigned_abs() + self.s().unsigned_abs()) / 2
    }

    /// Hexagonal distance between two cells.
    pub fn distance(&self, other: &Self) -> u64 {
        (*other - *self).magnitude()
    }

    /// Whether the two cells share a side.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.distance(other) == 1
    }

    /// The cell one step away in `direction` (reduced mod 6).
    pub fn step(&self, direction: i64) -> Self {
        *self + Self::DIRECTIONS[direction.rem_euclid(6) as usize]
    }

    /// The six adjacent cells in clockwise order starting north-east.
    pub fn adjacent(&self) -> [Self; 6] {
        Self::DIRECTIONS.map(|d| *self + d)
    }

    /// Index into [`Self::DIRECTIONS`] of `other - self`, if the cells are adjacent.
    pub fn direction_to(&self, other: &Self) -> Option<usize> {
        let delta = *other - *self;
        Self::DIRECTIONS.iter().position(|d| *d == delta)
    }

    /// All cells within `max_distance` of this one, excluding itself.
    ///
    /// The first six entries are always the adjacent cells in clockwise
    /// order; the remaining ones follow in an unspecified but stable order.
    /// Offsets come from the process-wide [`NeighborOffsets`] table.
    pub fn neighbors(&self, max_distance: u32) -> Vec<Self> {
        self.neighbors_in(NeighborOffsets::global(), max_distance)
    }

    /// Like [`Self::neighbors`], reading offsets from an explicit cache.
    pub fn neighbors_in(&self, cache: &NeighborOffsets, max_distance: u32) -> Vec<Self> {
        cache
            .offsets(max_distance)
            .iter()
            .map(|offset| *self + *offset)
            .collect()
    }

    /// Rotate around `center` by `steps` x 60 degrees, clockwise for positive steps.
    pub fn rotate60(&self, center: Self, steps: i64) -> Self {
        let d = *self - center;
        let (q, r, s) = (d.q, d.r, d.s());
        let rotated = match steps.rem_euclid(6) {
            0 => d,
            1 => Self::new(-r, -s),
            2 => Self::new(s, q),
            3 => Self::new(-q, -r),
            4 => Self::new(r, s),
            _ => Self::new(-s, -q),
        };
        center + rotated
    }
}

impl Add for HexCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            q: self.q + other.q,
            r: self.r + other.r,
        }
    }
}

impl Sub for HexCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            q: self.q - other.q,
            r: self.r - other.r,
        }
    }
}

impl Neg for HexCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            q: -self.q,
            r: -self.r,
        }
    }
}

impl Mul<i64> for HexCoord {
    type Output = Self;

    #[inline]
    fn mul(self, k: i64) -> Self {
        Self {
            q: self.q * k,
            r: self.r * k,
        }
    }
}

impl Mul<HexCoord> for i64 {
    type Output = HexCoord;

    #[inline]
    fn mul(self, coord: HexCoord) -> HexCoord {
        coord * self
    }
}

impl AddAssign for HexCoord {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl SubAssign for HexCoord {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

/// Row-major order: by r, then by q.
impl Ord for HexCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.r, self.q).cmp(&(other.r, other.q))
    }
}

impl PartialOrd for HexCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.q, self.r, self.s())
    }
}
