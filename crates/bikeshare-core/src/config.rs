//! Top-level model configuration.

use crate::error::{ConfigError, ConfigResult};

/// Parameters fixed for the lifetime of one model instance.
///
/// Typically built in code or loaded from a TOML/JSON file by the
/// application crate (enable the `serde` feature) and passed to the model
/// builder, which calls [`validate`](Self::validate) before constructing
/// anything.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    /// Number of mobile users to create.  Zero is a valid (station-only) run.
    pub user_count: u32,

    /// Grid width in cells.  Must be positive.
    pub grid_width: u32,

    /// Grid height in cells.  Must be positive.
    pub grid_height: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl ModelConfig {
    /// Reject configurations the model cannot be built from.
    ///
    /// A zero-sized grid has no cells to place agents on; every other field
    /// is valid for any value its type can hold.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width:  self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }

    /// Total number of grid cells.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        self.grid_width as u64 * self.grid_height as u64
    }
}
