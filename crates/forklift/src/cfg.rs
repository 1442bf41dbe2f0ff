//! Generator defaults and configuration.
//!
//! Policy
//! - Defaults are fixed constants. The operator surface does not expose them;
//!   tests and benches build a `GenCfg` directly when they need other values.

use crate::gen::GeneratorError;

/// Number of body pairs drawn per run.
pub const SIMULATIONS: usize = 10_000;
/// Half-length of each forklift segment (full length is `2 * HALF_LENGTH`).
pub const HALF_LENGTH: f64 = 1.5;
/// Upper bound for the radial distance of a pose from the origin.
pub const MAX_DISTANCE: f64 = 12.5;
/// Largest accepted `max_distance`; wider inclusive ranges overflow the uniform sampler.
pub const MAX_DISTANCE_LIMIT: f64 = f64::MAX / 2.0;
/// Output file, created in the working directory.
pub const OUTPUT_FILE: &str = "segments_for_geogebra.txt";

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenCfg {
    /// Number of pairs to draw.
    pub count: usize,
    /// Offset from the center to each endpoint.
    pub half_length: f64,
    /// Radial distances are drawn from `[0, max_distance]`.
    pub max_distance: f64,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            count: SIMULATIONS,
            half_length: HALF_LENGTH,
            max_distance: MAX_DISTANCE,
        }
    }
}

impl GenCfg {
    /// Reject bounds that cannot be sampled or bodies without length.
    /// `max_distance == 0` and `count == 0` are valid.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.half_length.is_finite() && self.max_distance.is_finite()) {
            return Err(GeneratorError::invalid(
                "half_length and max_distance must be finite",
            ));
        }
        if self.half_length <= 0.0 {
            return Err(GeneratorError::invalid("half_length must be > 0"));
        }
        if self.max_distance < 0.0 {
            return Err(GeneratorError::invalid("max_distance must be >= 0"));
        }
        if self.max_distance > MAX_DISTANCE_LIMIT {
            return Err(GeneratorError::invalid("max_distance must be <= f64::MAX / 2"));
        }
        Ok(())
    }

    /// Number of lines a run with this config writes.
    #[inline]
    pub fn line_count(&self) -> usize {
        2 * self.count
    }
}
