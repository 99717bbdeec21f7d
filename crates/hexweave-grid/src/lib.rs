//! Hexweave Grid
//!
//! Sparse storage over the hexagonal tiling and the two region algorithms
//! built on it.
//!
//! # Architecture
//!
//! - **Grid**: [`HexGrid`] maps cells to payloads; absent cells are simply missing
//! - **Layers**: [`LayeredGrid`] adds payloads on edges and vertices
//! - **Borders**: [`HexGrid::extract_borders`] traces territory boundaries as vertex chains
//! - **Convolution**: [`Kernel`] computes renormalized ring-weighted averages
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use hexweave_grid::{HexGrid, Kernel};
//! use hexweave_topology::HexCoord;
//!
//! let mut grid = HexGrid::new();
//! grid.insert(HexCoord::ORIGIN, 1.0f64);
//! for cell in HexCoord::ORIGIN.neighbors(2) {
//!     grid.insert(cell, 1.0);
//! }
//!
//! let territory: HashSet<_> = [HexCoord::ORIGIN].into_iter().collect();
//! let borders = grid.extract_borders(&territory);
//! assert_eq!(borders.len(), 1);
//! assert_eq!(borders[0].len(), 6);
//!
//! let kernel = Kernel::gaussian(1, Kernel::DEFAULT_STDDEV)?;
//! let smoothed = kernel.apply(&grid);
//! assert!((smoothed.get(HexCoord::ORIGIN).unwrap() - 1.0).abs() < 1e-9);
//! # Ok::<(), hexweave_grid::Error>(())
//! ```

mod border;
mod config;
mod convolution;
pub mod error;
mod grid;
mod layered;

pub use border::BorderChain;
pub use config::KernelConfig;
pub use convolution::{Accumulate, Kernel, MissingPolicy};
pub use error::{Error, Result};
pub use grid::HexGrid;
pub use layered::LayeredGrid;
