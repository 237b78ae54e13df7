//! Simulation configuration, fixed at construction.

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a configuration was rejected. All variants are fatal: the grid is
/// never built from a bad config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Zero-sized grids have no cells to simulate.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Dense storage allocates one entity per cell up front, so the cell
    /// count is bounded.
    #[error("grid of {width}x{height} cells exceeds the cell budget")]
    TooManyCells { width: u32, height: u32 },

    /// The reference cycle duration divides elapsed time every tick.
    #[error("cycle duration must be positive and finite, got {value} ms")]
    InvalidCycleDuration { value: f64 },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Constants the engine is built with. Not runtime-mutable.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Milliseconds for one full work cycle at rate 1.
    pub cycle_duration_ms: f64,
}

impl SimConfig {
    /// Upper bound on `width * height`. The grid allocates one entity per
    /// cell up front.
    pub const MAX_CELLS: u64 = u32::MAX as u64;

    /// Build a validated config.
    pub fn new(width: u32, height: u32, cycle_duration_ms: f64) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            cycle_duration_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants [`crate::engine::Engine::new`] relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if u64::from(self.width) * u64::from(self.height) > Self::MAX_CELLS {
            return Err(ConfigError::TooManyCells {
                width: self.width,
                height: self.height,
            });
        }
        if !self.cycle_duration_ms.is_finite() || self.cycle_duration_ms <= 0.0 {
            return Err(ConfigError::InvalidCycleDuration {
                value: self.cycle_duration_ms,
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 12,
            cycle_duration_ms: 1000.0,
        }
    }
}
