//! Canonical hexagon sides.
//!
//! A side is shared by two adjacent cells. It is stored as the cell from
//! which the other one lies in direction 0, 1 or 2, so the side between A and
//! B has one representation whatever the argument order.

use glam::DVec2;

use crate::{Error, HexCoord, HexVertex, Result};

/// A side of the tiling.
///
/// Equality and hashing depend only on the canonical (cell, direction) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexEdge {
    cell: HexCoord,
    direction: u8,
}

impl HexEdge {
    /// The side between two adjacent cells, in either order.
    pub fn new(a: HexCoord, b: HexCoord) -> Result<Self> {
        match a.direction_to(&b) {
            Some(direction) => Ok(Self::from_direction(a, direction as i64)),
            None => Err(Error::InvalidAdjacency {
                a,
                b,
                distance: a.distance(&b),
            }),
        }
    }

    /// The side of `cell` facing `direction` (reduced mod 6).
    pub fn from_direction(cell: HexCoord, direction: i64) -> Self {
        let direction = direction.rem_euclid(6);
        if direction < 3 {
            Self {
                cell,
                direction: direction as u8,
            }
        } else {
            Self {
                cell: cell.step(direction),
                direction: (direction - 3) as u8,
            }
        }
    }

    /// The side joining two adjacent corners.
    ///
    /// The corners must have exactly two cells in common.
    pub fn from_vertices(a: HexVertex, b: HexVertex) -> Result<Self> {
        let others = b.adjacent_cells();
        let mut shared = a
            .adjacent_cells()
            .into_iter()
            .filter(|cell| others.contains(cell));

        match (shared.next(), shared.next(), shared.next()) {
            (Some(x), Some(y), None) => Self::new(x, y),
            (x, y, z) => Err(Error::NonAdjacentVertices {
                a,
                b,
                shared: [x, y, z].iter().flatten().count(),
            }),
        }
    }

    /// Canonical direction index in 0..3 from the first cell to the second.
    pub const fn direction(&self) -> u8 {
        self.direction
    }

    /// The two cells sharing this side, in canonical order.
    pub fn cells(&self) -> [HexCoord; 2] {
        [self.cell, self.cell.step(i64::from(self.direction))]
    }

    /// Midpoint of the side on the world plane.
    pub fn center(&self) -> DVec2 {
        let [a, b] = self.cells();
        (a.world_position() + b.world_position()) * 0.5
    }

    /// The two cells touching only one end of this side.
    ///
    /// Obtained by turning the second cell 60 degrees either way around the first.
    pub fn vertex_adjacent_cells(&self) -> [HexCoord; 2] {
        let [a, b] = self.cells();
        [b.rotate60(a, 1), b.rotate60(a, -1)]
    }

    /// The four sides sharing exactly one corner with this one.
    pub fn adjacent_edges(&self) -> [HexEdge; 4] {
        let [a, b] = self.cells();
        let d = i64::from(self.direction);
        // Seen from `a` the corner cells lie at d + 1 and d - 1; seen from
        // `b` the same cells lie at d + 2 and d - 2.
        [
            Self::from_direction(a, d + 1),
            Self::from_direction(b, d + 2),
            Self::from_direction(a, d - 1),
            Self::from_direction(b, d - 2),
        ]
    }

    /// The two corners bounding this side.
    pub fn vertices(&self) -> [HexVertex; 2] {
        let d = i64::from(self.direction);
        [HexVertex::new(self.cell, d), HexVertex::new(self.cell, d + 1)]
    }
}

impl std::fmt::Display for HexEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.cells();
        write!(f, "[{},{}]", a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    const A: HexCoord = HexCoord::new(-1, 1);
    const B: HexCoord = HexCoord::new(-1, 2);
    const C: HexCoord = HexCoord::new(-2, 2);
    const D: HexCoord = HexCoord::new(0, 1);

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn set<T: Hash + Eq, const N: usize>(items: [T; N]) -> HashSet<T> {
        items.into_iter().collect()
    }

    #[test]
    fn equalities() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        let ba = HexEdge::new(B, A)?;
        let bc = HexEdge::new(B, C)?;

        assert_eq!(ab, HexEdge::new(A, B)?);
        assert_eq!(ab, ba);
        assert_eq!(hash_of(&ab), hash_of(&ba));
        assert_ne!(ab, bc);
        Ok(())
    }

    #[test]
    fn non_adjacent_cells_rejected() {
        let err = HexEdge::new(A, HexCoord::new(3, -3)).unwrap_err();
        assert!(matches!(err, Error::InvalidAdjacency { distance: 4, .. }));

        let err = HexEdge::new(A, A).unwrap_err();
        assert!(matches!(err, Error::InvalidAdjacency { distance: 0, .. }));
    }

    #[test]
    fn canonical_cells() -> Result<()> {
        let ab = HexEdge::new(B, A)?;
        assert_eq!(ab.cells(), [A, B]);
        assert_eq!(ab.direction(), 2);
        Ok(())
    }

    #[test]
    fn vertex_adjacent_cells() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        assert_eq!(set(ab.vertex_adjacent_cells()), set([C, D]));
        Ok(())
    }

    #[test]
    fn adjacent_edges() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        let expected = set([
            HexEdge::new(A, C)?,
            HexEdge::new(A, D)?,
            HexEdge::new(B, C)?,
            HexEdge::new(B, D)?,
        ]);
        assert_eq!(set(ab.adjacent_edges()), expected);
        Ok(())
    }

    #[test]
    fn vertices() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        assert_eq!(set(ab.vertices()), set([HexVertex::new(A, 2), HexVertex::new(A, 3)]));
        Ok(())
    }

    #[test]
    fn from_vertices() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        let [v0, v1] = ab.vertices();
        assert_eq!(HexEdge::from_vertices(v0, v1)?, ab);
        assert_eq!(HexEdge::from_vertices(v1, v0)?, ab);

        let err = HexEdge::from_vertices(v0, v0).unwrap_err();
        assert!(matches!(err, Error::NonAdjacentVertices { shared: 3, .. }));

        let far = HexVertex::new(HexCoord::new(10, 10), 0);
        let err = HexEdge::from_vertices(v0, far).unwrap_err();
        assert!(matches!(err, Error::NonAdjacentVertices { shared: 0, .. }));
        Ok(())
    }

    #[test]
    fn center_between_cells() -> Result<()> {
        let ab = HexEdge::new(A, B)?;
        let [v0, v1] = ab.vertices();
        let midpoint = (v0.world_position() + v1.world_position()) * 0.5;
        assert!(ab.center().abs_diff_eq(midpoint, 1e-4));
        Ok(())
    }

    #[test]
    fn display() -> Result<()> {
        assert_eq!(HexEdge::new(B, A)?.to_string(), "[(-1,1,0),(-1,2,-1)]");
        Ok(())
    }

    fn coord() -> impl Strategy<Value = HexCoord> {
        (-500i64..500, -500i64..500).prop_map(|(q, r)| HexCoord::new(q, r))
    }

    proptest! {
        #[test]
        fn order_independent(a in coord(), direction in 0usize..6) {
            let b = a + HexCoord::DIRECTIONS[direction];
            let ab = HexEdge::new(a, b).unwrap();
            let ba = HexEdge::new(b, a).unwrap();
            prop_assert_eq!(ab, ba);
            prop_assert_eq!(hash_of(&ab), hash_of(&ba));
            prop_assert!(ab.direction() < 3);
            prop_assert_eq!(set(ab.cells()), set([a, b]));
        }

        #[test]
        fn non_adjacent_fails(a in coord(), b in coord()) {
            prop_assume!(a.distance(&b) != 1);
            prop_assert!(HexEdge::new(a, b).is_err());
        }

        #[test]
        fn adjacent_edges_share_one_corner(a in coord(), direction in 0i64..6) {
            let edge = HexEdge::from_direction(a, direction);
            let corners = set(edge.vertices());
            let adjacent = edge.adjacent_edges();
            prop_assert_eq!(set(adjacent).len(), 4);
            for other in adjacent {
                let shared = other.vertices().iter().filter(|v| corners.contains(v)).count();
                prop_assert_eq!(shared, 1);
            }
        }

        #[test]
        fn vertices_round_trip(a in coord(), direction in 0i64..6) {
            let edge = HexEdge::from_direction(a, direction);
            let [v0, v1] = edge.vertices();
            prop_assert_eq!(HexEdge::from_vertices(v0, v1).unwrap(), edge);
        }
    }
}
