//! Kernel configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Kernel, MissingPolicy, Result};

/// Parameters for building and applying a smoothing kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Largest ring distance included in the kernel
    pub radius: u32,

    /// Standard deviation of the Gaussian profile, in rings
    pub stddev: f64,

    /// Handling of targets with nothing present within the radius
    pub policy: MissingPolicy,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            radius: 2,
            stddev: Kernel::DEFAULT_STDDEV,
            policy: MissingPolicy::Skip,
        }
    }
}

impl KernelConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// Reads `HEXWEAVE_KERNEL_RADIUS`, `HEXWEAVE_KERNEL_STDDEV` and
    /// `HEXWEAVE_MISSING_POLICY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any key lookup, falling back to defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let radius = match lookup("HEXWEAVE_KERNEL_RADIUS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("HEXWEAVE_KERNEL_RADIUS: '{raw}' is not a radius")))?,
            None => defaults.radius,
        };

        let stddev = match lookup("HEXWEAVE_KERNEL_STDDEV") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("HEXWEAVE_KERNEL_STDDEV: '{raw}' is not a number")))?,
            None => defaults.stddev,
        };

        let policy = match lookup("HEXWEAVE_MISSING_POLICY") {
            Some(raw) => raw.parse()?,
            None => defaults.policy,
        };

        Ok(Self {
            radius,
            stddev,
            policy,
        })
    }

    /// Build the Gaussian kernel described by this config.
    pub fn kernel(&self) -> Result<Kernel> {
        Kernel::from_config(self)
    }
}
