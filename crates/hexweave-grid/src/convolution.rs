//! Distance-weighted convolution over sparse grids.
//!
//! A kernel holds one weight per ring distance. The value at a target is the
//! weighted average of the present cells within the kernel radius, not
//! counting the target itself; dividing by the weight actually used keeps the
//! result an average next to holes and truncated grid edges. A target with no
//! present neighbor has no defined value and follows a [`MissingPolicy`].
//!
//! Weights are normalized over the full disc including distance 0, so the
//! distance 0 entry only matters to normalization.

use std::str::FromStr;

use glam::{Vec2, Vec3};
use hexweave_topology::{cells_in_ring, HexCoord, NeighborOffsets};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, HexGrid, KernelConfig, Result};

/// Payloads that can be averaged: summed and scaled by a real weight.
pub trait Accumulate: Clone {
    /// Additive identity.
    fn zero() -> Self;

    /// Sum of two values.
    fn combine(self, other: Self) -> Self;

    /// Value multiplied by a weight.
    fn scale(self, weight: f64) -> Self;

    /// Lift a scalar into the payload type, used for sentinel results.
    fn from_scalar(value: f64) -> Self;
}

impl Accumulate for f64 {
    fn zero() -> Self {
        0.0
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, weight: f64) -> Self {
        self * weight
    }

    fn from_scalar(value: f64) -> Self {
        value
    }
}

impl Accumulate for f32 {
    fn zero() -> Self {
        0.0
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, weight: f64) -> Self {
        self * weight as f32
    }

    fn from_scalar(value: f64) -> Self {
        value as f32
    }
}

impl Accumulate for Vec2 {
    fn zero() -> Self {
        Vec2::ZERO
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, weight: f64) -> Self {
        self * weight as f32
    }

    fn from_scalar(value: f64) -> Self {
        Vec2::splat(value as f32)
    }
}

impl Accumulate for Vec3 {
    fn zero() -> Self {
        Vec3::ZERO
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }

    fn scale(self, weight: f64) -> Self {
        self * weight as f32
    }

    fn from_scalar(value: f64) -> Self {
        Vec3::splat(value as f32)
    }
}

/// What to do with a target that has no present cell within the radius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Leave the target absent from the output.
    #[default]
    Skip,
    /// Fail with [`Error::UndefinedAggregate`].
    Error,
    /// Store this value, lifted with [`Accumulate::from_scalar`].
    Sentinel(f64),
}

impl FromStr for MissingPolicy {
    type Err = Error;

    /// Parses `skip`, `error` or `sentinel:<value>`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "error" => Ok(Self::Error),
            other => other
                .strip_prefix("sentinel:")
                .and_then(|value| value.trim().parse().ok())
                .map(Self::Sentinel)
                .ok_or_else(|| Error::Config(format!("unknown missing policy '{s}'"))),
        }
    }
}

/// Immutable ring-weight table.
///
/// Deserialization requires `radius + 1` finite non-negative weights summing
/// to one over the full disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KernelTable")]
pub struct Kernel {
    radius: u32,
    weights: Vec<f64>,
}

#[derive(Deserialize)]
struct KernelTable {
    radius: u32,
    weights: Vec<f64>,
}

impl TryFrom<KernelTable> for Kernel {
    type Error = Error;

    fn try_from(table: KernelTable) -> Result<Self> {
        let KernelTable { radius, weights } = table;

        if weights.len() != radius as usize + 1 {
            return Err(Error::InvalidKernel(format!(
                "radius {radius} needs {} weights, got {}",
                radius as usize + 1,
                weights.len()
            )));
        }
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(Error::InvalidKernel(
                "weights must be finite and non-negative".to_string(),
            ));
        }

        let kernel = Self { radius, weights };
        let total = kernel.total_weight();
        if (total - 1.0).abs() > 1e-6 {
            return Err(Error::InvalidKernel(format!(
                "weights sum to {total} over the disc, expected 1"
            )));
        }
        Ok(kernel)
    }
}

impl Kernel {
    /// Standard deviation used when none is given.
    pub const DEFAULT_STDDEV: f64 = std::f64::consts::FRAC_PI_2;

    /// Gaussian profile over ring distance, normalized over the full disc.
    ///
    /// `weights[d] = exp(-d² / 2σ²) / Σ ring_count(d) · exp(-d² / 2σ²)`, so a
    /// uniform field with no missing cells is reproduced unchanged.
    pub fn gaussian(radius: u32, stddev: f64) -> Result<Self> {
        if !stddev.is_finite() || stddev <= 0.0 {
            return Err(Error::InvalidKernel(format!(
                "standard deviation must be finite and positive, got {stddev}"
            )));
        }

        let profile = |d: u32| (-f64::from(d * d) / (2.0 * stddev * stddev)).exp();
        let sum: f64 = (0..=radius)
            .map(|d| cells_in_ring(u64::from(d)) as f64 * profile(d))
            .sum();
        let weights = (0..=radius).map(|d| profile(d) / sum).collect();

        debug!(radius, stddev, "built gaussian kernel");
        Ok(Self { radius, weights })
    }

    /// Gaussian kernel from configuration.
    pub fn from_config(config: &KernelConfig) -> Result<Self> {
        Self::gaussian(config.radius, config.stddev)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Weights indexed by ring distance, `radius + 1` entries.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight for a ring distance, clamped to the outermost ring.
    pub fn weight(&self, distance: u64) -> f64 {
        let last = self.weights.len().saturating_sub(1);
        self.weights
            .get((distance as usize).min(last))
            .copied()
            .unwrap_or(0.0)
    }

    /// Σ over the full disc of ring size times ring weight.
    pub fn total_weight(&self) -> f64 {
        self.weights
            .iter()
            .enumerate()
            .map(|(d, w)| cells_in_ring(d as u64) as f64 * w)
            .sum()
    }

    /// Present neighbors within the radius of `at`, with their weights.
    fn taps<'a, T>(
        &'a self,
        grid: &'a HexGrid<T>,
        offsets: &'a [HexCoord],
        at: HexCoord,
    ) -> impl Iterator<Item = (&'a T, f64)> + 'a {
        offsets.iter().filter_map(move |offset| {
            grid.get(at + *offset)
                .map(|value| (value, self.weight(offset.magnitude())))
        })
    }

    fn offsets(&self) -> std::sync::Arc<[HexCoord]> {
        NeighborOffsets::global().offsets(self.radius)
    }

    /// Renormalized weighted average of the neighbors of `at`, if any is present.
    pub fn sample<T: Accumulate>(&self, grid: &HexGrid<T>, at: HexCoord) -> Option<T> {
        self.sample_in(grid, &self.offsets(), at)
    }

    fn sample_in<T: Accumulate>(
        &self,
        grid: &HexGrid<T>,
        offsets: &[HexCoord],
        at: HexCoord,
    ) -> Option<T> {
        let (sum, total) = self
            .taps(grid, offsets, at)
            .fold((T::zero(), 0.0), |(sum, total), (value, w)| {
                (sum.combine(value.clone().scale(w)), total + w)
            });

        (total > 0.0).then(|| sum.scale(1.0 / total))
    }

    /// Smooth every present cell of `grid`.
    ///
    /// Cells with no present neighbor within the radius are left out, as
    /// [`MissingPolicy::Skip`]. Use [`Kernel::apply_to`] over `grid.coords()`
    /// for the other policies.
    pub fn apply<T: Accumulate>(&self, grid: &HexGrid<T>) -> HexGrid<T> {
        let offsets = self.offsets();
        let smoothed: HexGrid<T> = grid
            .coords()
            .filter_map(|at| self.sample_in(grid, &offsets, at).map(|value| (at, value)))
            .collect();

        debug!(
            cells = grid.len(),
            skipped = grid.len() - smoothed.len(),
            radius = self.radius,
            "applied kernel"
        );
        smoothed
    }

    /// Evaluate the kernel at arbitrary targets, present in `grid` or not.
    ///
    /// Targets with nothing present within the radius are handled by `policy`.
    pub fn apply_to<T, I>(
        &self,
        grid: &HexGrid<T>,
        targets: I,
        policy: MissingPolicy,
    ) -> Result<HexGrid<T>>
    where
        T: Accumulate,
        I: IntoIterator<Item = HexCoord>,
    {
        let offsets = self.offsets();
        let mut out = HexGrid::new();
        let mut skipped = 0usize;

        for at in targets {
            match (self.sample_in(grid, &offsets, at), policy) {
                (Some(value), _) => {
                    out.insert(at, value);
                }
                (None, MissingPolicy::Skip) => skipped += 1,
                (None, MissingPolicy::Error) => {
                    warn!(cell = %at, "no cell within kernel radius");
                    return Err(Error::UndefinedAggregate { cell: at });
                }
                (None, MissingPolicy::Sentinel(value)) => {
                    out.insert(at, T::from_scalar(value));
                }
            }
        }

        debug!(cells = out.len(), skipped, radius = self.radius, "applied kernel to targets");
        Ok(out)
    }

    /// Smooth a grid of any payload with caller-supplied arithmetic.
    ///
    /// `lift` maps a stored payload into the accumulator type, `add` sums two
    /// accumulators and `scale` multiplies one by a weight. Cells with no
    /// present neighbor are left out, as in [`Kernel::apply`].
    pub fn apply_with<T, U, A, S, L>(&self, grid: &HexGrid<T>, add: A, scale: S, lift: L) -> HexGrid<U>
    where
        A: Fn(U, U) -> U,
        S: Fn(U, f64) -> U,
        L: Fn(&T) -> U,
    {
        let offsets = self.offsets();
        let mut out = HexGrid::with_capacity(grid.len());

        for at in grid.coords() {
            let mut sum: Option<U> = None;
            let mut total = 0.0;

            for (value, w) in self.taps(grid, &offsets, at) {
                total += w;
                let term = scale(lift(value), w);
                sum = Some(match sum {
                    Some(acc) => add(acc, term),
                    None => term,
                });
            }

            if let Some(sum) = sum.filter(|_| total > 0.0) {
                out.insert(at, scale(sum, 1.0 / total));
            }
        }

        debug!(
            cells = grid.len(),
            skipped = grid.len() - out.len(),
            radius = self.radius,
            "applied kernel with closures"
        );
        out
    }
}
