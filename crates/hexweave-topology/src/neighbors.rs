//! Neighbor offset tables.
//!
//! The set of offsets within a radius is a pure function of the radius and is
//! requested in hot loops (convolution, border tracing), so tables are built
//! once per radius and shared behind a read-mostly lock.
//!
//! Ring sizes:
//! - Ring 0: 1 cell (the center)
//! - Ring n > 0: 6n cells
//!
//! Cells within radius n (inclusive of the center): 1 + 3n(n+1)

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::trace;

use crate::HexCoord;

/// Number of cells at exactly `ring` steps from a center.
#[inline]
pub const fn cells_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        6 * ring
    }
}

/// Number of cells within `radius` steps of a center, center included.
#[inline]
pub const fn cells_within(radius: u64) -> u64 {
    1 + 3 * radius * (radius + 1)
}

/// Memoized neighbor offsets keyed by radius.
///
/// Safe to share between threads. Use [`NeighborOffsets::global`] for the
/// process-wide table or own an instance to keep the memory scoped.
#[derive(Debug, Default)]
pub struct NeighborOffsets {
    tables: RwLock<HashMap<u32, Arc<[HexCoord]>>>,
}

impl NeighborOffsets {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`HexCoord::neighbors`].
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<NeighborOffsets> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Offsets of every cell within `radius` of the origin, origin excluded.
    ///
    /// The first six entries are [`HexCoord::DIRECTIONS`] in order.
    pub fn offsets(&self, radius: u32) -> Arc<[HexCoord]> {
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&radius)
        {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(tables.entry(radius).or_insert_with(|| {
            trace!(radius, "building neighbor offset table");
            generate(radius).into()
        }))
    }

    /// Number of radii currently memoized.
    pub fn cached_radii(&self) -> usize {
        self.tables.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

fn generate(radius: u32) -> Vec<HexCoord> {
    if radius == 0 {
        return Vec::new();
    }

    let n = i64::from(radius);
    let mut offsets = Vec::with_capacity(cells_within(u64::from(radius)) as usize - 1);
    offsets.extend(HexCoord::DIRECTIONS);

    for q in -n..=n {
        let lower = (-n).max(-n - q);
        let upper = n.min(n - q);
        for r in lower..=upper {
            let offset = HexCoord::new(q, r);
            // Origin is skipped, ring 1 is already in place
            if offset.magnitude() > 1 {
                offsets.push(offset);
            }
        }
    }

    offsets
}
