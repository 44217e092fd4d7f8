use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CompanionError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Easing parameters for the follow loop.
pub struct MotionOptions {
    /// Fraction of the remaining distance covered each frame, in `(0, 1]`.
    #[schemars(title = "Follow Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub speed_factor: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self { speed_factor: 0.17 }
    }
}

impl MotionOptions {
    /// Reject speed factors that are non-finite or outside `(0, 1]`.
    pub fn validate(&self) -> Result<f32, CompanionError> {
        let factor = self.speed_factor;
        if !factor.is_finite() {
            return Err(CompanionError::invalid(
                "motion.speed_factor",
                format!("speed factor must be finite, got {factor}"),
            ));
        }
        if factor <= 0.0 || factor > 1.0 {
            return Err(CompanionError::invalid(
                "motion.speed_factor",
                format!("speed factor must be in (0, 1], got {factor}"),
            ));
        }
        Ok(factor)
    }
}
