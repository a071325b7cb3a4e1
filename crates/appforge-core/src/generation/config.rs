//! Generation driver configuration.

use crate::error::{ForgeError, Result};
use std::time::Duration;

/// Default tick interval of the simulated generation backend.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Default progress step per tick, in percentage points.
pub const DEFAULT_STEP: u8 = 5;

/// Configuration for a generation run.
///
/// Validated at construction: no silently-corrected defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Interval between progress ticks
    pub tick_interval: Duration,
    /// Percentage points added per tick, 1..=100
    pub step: u8,
}

impl GenerationConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::Config` if the interval is zero or the step is
    /// outside 1..=100.
    pub fn new(tick_interval: Duration, step: u8) -> Result<Self> {
        if tick_interval.is_zero() {
            return Err(ForgeError::config("tick interval must be non-zero"));
        }
        if step == 0 || step > 100 {
            return Err(ForgeError::config(format!(
                "step must be within 1..=100, got {}",
                step
            )));
        }
        Ok(Self {
            tick_interval,
            step,
        })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            step: DEFAULT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GenerationConfig::default();
        assert!(GenerationConfig::new(config.tick_interval, config.step).is_ok());
    }

    #[test]
    fn test_rejects_zero_interval() {
        assert!(GenerationConfig::new(Duration::ZERO, 5).is_err());
    }

    #[test]
    fn test_rejects_bad_step() {
        assert!(GenerationConfig::new(Duration::from_millis(10), 0).is_err());
        assert!(GenerationConfig::new(Duration::from_millis(10), 101).is_err());
        assert!(GenerationConfig::new(Duration::from_millis(10), 100).is_ok());
    }
}
