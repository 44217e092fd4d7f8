use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{behavior::BehaviorTimings, error::CompanionError};

/// Longest accepted delay; matches the schema `max` on every field.
const MAX_DELAY_MS: f64 = 60_000.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Delays driving the behavior timeout chain, in milliseconds.
pub struct TimingOptions {
    /// Time without pointer movement before the companion goes idle.
    #[schemars(title = "Idle Delay", range(min = 0.0, max = 60000.0), extend("step" = 50.0))]
    pub idle_delay_ms: f64,
    /// Time spent idle before falling asleep.
    #[schemars(title = "Sleep Delay", range(min = 0.0, max = 60000.0), extend("step" = 50.0))]
    pub sleep_delay_ms: f64,
    /// Time spent asleep before the affection overlay appears.
    #[schemars(title = "Affection Delay", range(min = 0.0, max = 60000.0), extend("step" = 50.0))]
    pub affection_delay_ms: f64,
    /// How long the affection overlay stays visible.
    #[schemars(title = "Affection Duration", range(min = 0.0, max = 60000.0), extend("step" = 50.0))]
    pub affection_duration_ms: f64,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            idle_delay_ms: 800.0,
            sleep_delay_ms: 2000.0,
            affection_delay_ms: 3000.0,
            affection_duration_ms: 2000.0,
        }
    }
}

impl TimingOptions {
    /// Validate every delay and convert to [`BehaviorTimings`].
    ///
    /// Negative, non-finite, or over-long delays are rejected, never clamped.
    pub fn validate(&self) -> Result<BehaviorTimings, CompanionError> {
        Ok(BehaviorTimings {
            idle: delay("timing.idle_delay_ms", self.idle_delay_ms)?,
            sleep: delay("timing.sleep_delay_ms", self.sleep_delay_ms)?,
            affection: delay(
                "timing.affection_delay_ms",
                self.affection_delay_ms,
            )?,
            affection_duration: delay(
                "timing.affection_duration_ms",
                self.affection_duration_ms,
            )?,
        })
    }
}

fn delay(field: &'static str, ms: f64) -> Result<Duration, CompanionError> {
    if !ms.is_finite() {
        return Err(CompanionError::invalid(
            field,
            format!("delay must be finite, got {ms}"),
        ));
    }
    if ms < 0.0 {
        return Err(CompanionError::invalid(
            field,
            format!("delay must not be negative, got {ms}"),
        ));
    }
    if ms > MAX_DELAY_MS {
        return Err(CompanionError::invalid(
            field,
            format!("delay must be at most {MAX_DELAY_MS}ms, got {ms}"),
        ));
    }
    Duration::try_from_secs_f64(ms / 1000.0)
        .map_err(|e| CompanionError::invalid(field, e.to_string()))
}
