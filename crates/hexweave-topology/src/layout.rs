//! Offset addressing and world-plane mapping.
//!
//! Offset coordinates index a rectangular array with odd rows shifted half a
//! cell to the right. World positions place a pointy-top hexagon of unit side
//! length with r growing downwards (negative y).

use glam::DVec2;

use crate::HexCoord;

/// Length of a hexagon side.
pub const SIDE_LENGTH: f64 = 1.0;

/// Square root of 3.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Horizontal distance between two cells of the same row.
pub const HORIZONTAL_SPACING: f64 = SIDE_LENGTH * SQRT_3;

/// Vertical distance between two adjacent rows.
pub const VERTICAL_SPACING: f64 = SIDE_LENGTH * 1.5;

/// Convert a world point to fractional cube coordinates (q, r, s).
pub(crate) fn fractional_cube(point: DVec2) -> (f64, f64, f64) {
    let q = (SQRT_3 * point.x + point.y) / (3.0 * SIDE_LENGTH);
    let r = -2.0 / 3.0 * point.y / SIDE_LENGTH;
    (q, r, -q - r)
}

impl HexCoord {
    /// Create a coordinate from offset (column, row) addressing.
    pub const fn from_offset(x: i64, y: i64) -> Self {
        Self {
            q: x - (y - (y & 1)) / 2,
            r: y,
        }
    }

    /// Offset (column, row) address of this cell.
    pub const fn to_offset(&self) -> (i64, i64) {
        (self.q + (self.r - (self.r & 1)) / 2, self.r)
    }

    /// Center of the cell on the world plane.
    pub fn world_position(&self) -> DVec2 {
        DVec2::new(
            HORIZONTAL_SPACING * (self.q as f64 + 0.5 * self.r as f64),
            -VERTICAL_SPACING * self.r as f64,
        )
    }

    /// The cell containing a world point.
    ///
    /// Rounds each cube axis independently, then recomputes the axis with the
    /// largest rounding error from the other two so that q + r + s = 0.
    pub fn nearest(point: DVec2) -> Self {
        let (q, r, s) = fractional_cube(point);

        let mut rq = q.round();
        let mut rr = r.round();
        let rs = s.round();

        let dq = (rq - q).abs();
        let dr = (rr - r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            rq = -rr - rs;
        } else if dr > ds {
            rr = -rq - rs;
        }

        Self::new(rq as i64, rr as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const O: HexCoord = HexCoord::ORIGIN;
    const A: HexCoord = HexCoord::new(2, -2);
    const B: HexCoord = HexCoord::new(0, 2);
    const C: HexCoord = HexCoord::new(-3, 2);

    fn assert_close(actual: DVec2, expected: DVec2) {
        assert!(
            actual.abs_diff_eq(expected, 1e-5),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn cube_to_offset() {
        assert_eq!(O.to_offset(), (0, 0));
        assert_eq!(A.to_offset(), (1, -2));
        assert_eq!(B.to_offset(), (1, 2));
        assert_eq!(C.to_offset(), (-2, 2));
    }

    #[test]
    fn offset_to_cube() {
        assert_eq!(HexCoord::from_offset(0, 0), O);
        assert_eq!(HexCoord::from_offset(1, -2), A);
        assert_eq!(HexCoord::from_offset(1, 2), B);
        assert_eq!(HexCoord::from_offset(-2, 2), C);
    }

    #[test]
    fn world_positions() {
        assert_close(O.world_position(), DVec2::ZERO);
        assert_close(A.world_position(), DVec2::new(SQRT_3, 3.0));
        assert_close(B.world_position(), DVec2::new(SQRT_3, -3.0));
        assert_close(C.world_position(), DVec2::new(-2.0 * SQRT_3, -3.0));
    }

    #[test]
    fn nearest_recovers_centers() {
        for cell in [O, A, B, C] {
            assert_eq!(HexCoord::nearest(cell.world_position()), cell);
        }
    }

    #[test]
    fn nearest_with_offsets() {
        assert_eq!(HexCoord::nearest(O.world_position() + DVec2::new(-0.4, 0.3)), O);
        assert_eq!(HexCoord::nearest(A.world_position() + DVec2::new(0.25, -0.3)), A);
        assert_eq!(HexCoord::nearest(B.world_position() + DVec2::new(0.4, 0.4)), B);
        assert_eq!(HexCoord::nearest(C.world_position() + DVec2::new(-0.4, -0.3)), C);
    }

    #[test]
    fn adjacent_cells_are_one_spacing_apart() {
        for n in A.adjacent() {
            let gap = n.world_position().distance(A.world_position());
            assert!((gap - HORIZONTAL_SPACING).abs() < 1e-4);
        }
    }

    #[test]
    fn far_cells_round_trip() {
        let far = HexCoord::new(50_000_000, 7);
        assert_eq!(HexCoord::nearest(far.world_position()), far);
        assert_eq!(HexCoord::nearest(far.world_position() + DVec2::new(0.4, -0.3)), far);

        let corner = HexCoord::new(-3_000_000_000, 1_500_000_001);
        assert_eq!(HexCoord::nearest(corner.world_position()), corner);
    }

    fn coord() -> impl Strategy<Value = HexCoord> {
        (-1000i64..1000, -1000i64..1000).prop_map(|(q, r)| HexCoord::new(q, r))
    }

    proptest! {
        #[test]
        fn offset_round_trip(c in coord()) {
            let (x, y) = c.to_offset();
            prop_assert_eq!(HexCoord::from_offset(x, y), c);
        }

        #[test]
        fn world_round_trip(c in coord()) {
            prop_assert_eq!(HexCoord::nearest(c.world_position()), c);
        }

        #[test]
        fn perturbed_world_round_trip(
            c in coord(),
            angle in 0.0f64..std::f64::consts::TAU,
            radius in 0.0f64..0.4,
        ) {
            let nudge = DVec2::from_angle(angle) * radius;
            prop_assert_eq!(HexCoord::nearest(c.world_position() + nudge), c);
        }
    }
}
