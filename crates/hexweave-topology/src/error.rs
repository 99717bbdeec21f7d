//! Error types for hexweave-topology.

use thiserror::Error;

use crate::{HexCoord, HexVertex};

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when constructing derived identities.
///
/// Coordinate algebra itself is total; only edge construction can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Two cells that do not share a side were used to name an edge.
    #[error("cells {a} and {b} are not adjacent (distance {distance})")]
    InvalidAdjacency {
        a: HexCoord,
        b: HexCoord,
        distance: u64,
    },

    /// Two vertices that do not bound a common side were used to name an edge.
    #[error("vertices {a} and {b} share {shared} cells, expected 2")]
    NonAdjacentVertices {
        a: HexVertex,
        b: HexVertex,
        shared: usize,
    },
}
