//! Error types for hexweave-grid.

use hexweave_topology::HexCoord;
use thiserror::Error;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grid operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge or vertex identity could not be built.
    #[error("topology error: {0}")]
    Topology(#[from] hexweave_topology::Error),

    /// A convolution target had no present cell within the kernel radius.
    #[error("no cell within kernel radius of {cell}")]
    UndefinedAggregate { cell: HexCoord },

    /// Kernel parameters are unusable.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
