//! Hexweave Topology
//!
//! Canonical identities for the cells, edges and vertices of a pointy-top
//! hexagonal tiling, and the adjacency algebra between them.
//!
//! # Coordinates
//!
//! Cells use axial coordinates (q, r) with the implicit cube axis s = -q - r.
//! Rectangular "offset" addressing (odd rows shifted right) converts to and
//! from axial form as a bijection, and every cell maps to a fixed point of
//! the world plane for a hexagon of unit side length:
//!
//! ```text
//! x = sqrt(3) * (q + r / 2)
//! y = -1.5 * r
//! ```
//!
//! # Directions
//!
//! The six distance-1 neighbors are enumerated clockwise starting from the
//! north-east neighbor (index 0). Vertex and edge direction indices are
//! defined relative to this ordering: vertex direction 0 is the north corner
//! and edge direction `d` lies between vertex directions `d` and `d + 1`.
//!
//! # Canonical identities
//!
//! Each corner is shared by three cells and each side by two, so the same
//! geometric entity can be named several ways. [`HexVertex`] and [`HexEdge`]
//! normalize every naming to a single representative at construction time;
//! equality and hashing only ever see the normalized fields.

mod edge;
mod error;
mod hex;
mod layout;
mod neighbors;
mod vertex;

pub use edge::HexEdge;
pub use error::{Error, Result};
pub use hex::HexCoord;
pub use layout::{HORIZONTAL_SPACING, SIDE_LENGTH, SQRT_3, VERTICAL_SPACING};
pub use neighbors::{cells_in_ring, cells_within, NeighborOffsets};
pub use vertex::{HexVertex, Orientation};

/// Number of cells adjacent to a cell.
pub const CELL_NEIGHBORS: usize = 6;

/// Number of cells sharing a corner.
pub const CELLS_PER_VERTEX: usize = 3;

/// Number of cells sharing a side.
pub const CELLS_PER_EDGE: usize = 2;

// Compile-time assertion that the first ring is exactly the adjacent cells
const _: () = assert!(cells_within(1) == 1 + CELL_NEIGHBORS as u64);
