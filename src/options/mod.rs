//! Companion options with TOML preset support.
//!
//! The configuration surface is deliberately small: the four behavior delays
//! and the follow easing factor. Options serialize to/from TOML and every
//! section uses `#[serde(default)]`, so a file that only overrides
//! `[motion]` keeps the default timings.

mod motion;
mod timing;

use std::path::Path;

pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::CompanionError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Behavior timeout chain delays.
    pub timing: TimingOptions,
    /// Follow easing parameters.
    pub motion: MotionOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Check every field, returning the first rejected value.
    pub fn validate(&self) -> Result<(), CompanionError> {
        let _ = self.timing.validate()?;
        let _ = self.motion.validate()?;
        Ok(())
    }

    /// Parse options from a TOML string and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, CompanionError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| CompanionError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CompanionError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("Loaded companion options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CompanionError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CompanionError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_match_reference_constants() {
        let timings = Options::default().timing.validate().unwrap();
        assert_eq!(timings.idle, Duration::from_millis(800));
        assert_eq!(timings.sleep, Duration::from_millis(2000));
        assert_eq!(timings.affection, Duration::from_millis(3000));
        assert_eq!(timings.affection_duration, Duration::from_millis(2000));
        assert_eq!(Options::default().motion.validate().unwrap(), 0.17);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[motion]
speed_factor = 0.25
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.motion.speed_factor, 0.25);
        assert_eq!(opts.timing, TimingOptions::default());
    }

    #[test]
    fn negative_delay_is_rejected_not_clamped() {
        let toml_str = r"
[timing]
sleep_delay_ms = -5.0
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        match err {
            CompanionError::InvalidOption { field, reason } => {
                assert_eq!(field, "timing.sleep_delay_ms");
                assert!(reason.contains("negative"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let mut opts = Options::default();
        opts.timing.idle_delay_ms = f64::NAN;
        assert!(matches!(
            opts.validate(),
            Err(CompanionError::InvalidOption {
                field: "timing.idle_delay_ms",
                ..
            })
        ));

        let mut opts = Options::default();
        opts.motion.speed_factor = f32::INFINITY;
        assert!(matches!(
            opts.validate(),
            Err(CompanionError::InvalidOption {
                field: "motion.speed_factor",
                ..
            })
        ));
    }

    #[test]
    fn huge_delay_is_rejected_at_configuration_time() {
        let mut opts = Options::default();
        opts.timing.idle_delay_ms = 1.5e22;
        let err = crate::Companion::new(&opts).unwrap_err();
        match err {
            CompanionError::InvalidOption { field, reason } => {
                assert_eq!(field, "timing.idle_delay_ms");
                assert!(reason.contains("at most"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }

        opts.timing.idle_delay_ms = 60_000.0;
        assert!(opts.validate().is_ok());
        opts.timing.affection_duration_ms = 60_000.5;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn speed_factor_must_be_in_unit_interval() {
        for factor in [0.0, -0.1, 1.5] {
            let opts = Options {
                motion: MotionOptions {
                    speed_factor: factor,
                },
                ..Options::default()
            };
            assert!(opts.validate().is_err(), "accepted {factor}");
        }
        let snap = MotionOptions { speed_factor: 1.0 };
        assert_eq!(snap.validate().unwrap(), 1.0);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[timing\nidle = ").unwrap_err();
        assert!(matches!(err, CompanionError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = std::env::temp_dir().join(format!(
            "cursor-companion-options-{}",
            std::process::id()
        ));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.timing.idle_delay_ms = 1200.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("timing"));
        assert!(props.contains_key("motion"));

        let timing = &props["timing"]["properties"];
        assert!(timing.get("idle_delay_ms").is_some());
        assert!(timing.get("affection_duration_ms").is_some());
        assert!(props["motion"]["properties"].get("speed_factor").is_some());
    }
}
