//! User configuration (~/.parallax/config.toml)
//!
//! Every field has a default, so a partial (or missing) file is always valid.
//! Values are validated after parsing; the playground falls back to defaults
//! when validation fails.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants;
use crate::error::{ConfigError, ConfigResult};
use crate::momentum::MomentumConfig;
use crate::paths;
use crate::reveal::InViewOptions;
use crate::sticky::StickyScaleMapper;

/// Reveal animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio that flips a section into view
    pub threshold: f64,
    /// Reveal once and stop watching
    pub trigger_once: bool,
    /// Delay between consecutive characters (ms)
    pub char_stagger_ms: u64,
    /// Delay between consecutive list items (ms)
    pub item_stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: constants::reveal::DEFAULT_THRESHOLD,
            trigger_once: true,
            char_stagger_ms: constants::reveal::CHAR_STAGGER.as_millis() as u64,
            item_stagger_ms: constants::reveal::ITEM_STAGGER.as_millis() as u64,
        }
    }
}

impl RevealConfig {
    pub fn in_view_options(&self) -> InViewOptions {
        InViewOptions {
            threshold: self.threshold,
            trigger_once: self.trigger_once,
        }
    }

    pub fn char_stagger(&self) -> Duration {
        Duration::from_millis(self.char_stagger_ms)
    }

    pub fn item_stagger(&self) -> Duration {
        Duration::from_millis(self.item_stagger_ms)
    }
}

/// Counter, marquee and frame pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub counter_duration_ms: u64,
    pub marquee_period_ms: u64,
    pub frame_period_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: constants::timing::COUNTER_DURATION.as_millis() as u64,
            marquee_period_ms: constants::timing::MARQUEE_PERIOD.as_millis() as u64,
            frame_period_ms: constants::timing::FRAME_PERIOD.as_millis() as u64,
        }
    }
}

impl TimingConfig {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn marquee_period(&self) -> Duration {
        Duration::from_millis(self.marquee_period_ms)
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_millis(self.frame_period_ms)
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub reveal: RevealConfig,
    pub sticky: StickyScaleMapper,
    pub momentum: MomentumConfig,
    pub timing: TimingConfig,
}

impl ParallaxConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path. A missing file is an error here;
    /// use [`ParallaxConfig::load`] for the lenient variant.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Load ~/.parallax/config.toml, returning defaults when it does not exist
    pub fn load() -> ConfigResult<Self> {
        let path = paths::config_file()?;
        match Self::load_from(&path) {
            Err(ConfigError::NotFound { .. }) => Ok(Self::default()),
            other => other,
        }
    }

    /// Write this config as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "Wrote config");
        Ok(())
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the animations cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        let reveal = &self.reveal;
        if !(0.0..=1.0).contains(&reveal.threshold) {
            return Err(ConfigError::invalid("reveal.threshold", reveal.threshold));
        }

        let sticky = &self.sticky;
        if !(sticky.min_font_vw > 0.0 && sticky.min_font_vw <= sticky.max_font_vw) {
            return Err(ConfigError::invalid("sticky.min_font_vw", sticky.min_font_vw));
        }
        if !(0.0 < sticky.grow_end && sticky.grow_end <= sticky.shrink_start && sticky.shrink_start < 1.0)
        {
            return Err(ConfigError::invalid(
                "sticky.grow_end/shrink_start",
                format!("{}/{}", sticky.grow_end, sticky.shrink_start),
            ));
        }
        if !(0.0..=1.0).contains(&sticky.hold_opacity) {
            return Err(ConfigError::invalid("sticky.hold_opacity", sticky.hold_opacity));
        }
        if !sticky.center_offset_vh.is_finite() {
            return Err(ConfigError::invalid(
                "sticky.center_offset_vh",
                sticky.center_offset_vh,
            ));
        }

        let momentum = &self.momentum;
        if !(momentum.friction > 0.0 && momentum.friction < 1.0) {
            return Err(ConfigError::invalid("momentum.friction", momentum.friction));
        }
        if momentum.stop_velocity.is_nan() || momentum.stop_velocity <= 0.0 {
            return Err(ConfigError::invalid(
                "momentum.stop_velocity",
                momentum.stop_velocity,
            ));
        }

        let timing = &self.timing;
        if timing.frame_period_ms == 0 {
            return Err(ConfigError::invalid("timing.frame_period_ms", 0));
        }
        if timing.marquee_period_ms == 0 {
            return Err(ConfigError::invalid("timing.marquee_period_ms", 0));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParallaxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.reveal.threshold, 0.1);
        assert!(config.reveal.trigger_once);
        assert_eq!(config.momentum.friction, 0.95);
        assert_eq!(config.momentum.stop_velocity, 0.5);
        assert_eq!(config.timing.counter_duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = ParallaxConfig::from_toml(
            r#"
            [momentum]
            friction = 0.9

            [reveal]
            trigger_once = false
            "#,
        )
        .unwrap();

        assert_eq!(config.momentum.friction, 0.9);
        assert_eq!(config.momentum.stop_velocity, 0.5);
        assert!(!config.reveal.trigger_once);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.sticky, StickyScaleMapper::default());
    }

    #[test]
    fn test_invalid_friction_rejected() {
        let err = ParallaxConfig::from_toml("[momentum]\nfriction = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "momentum.friction",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let err = ParallaxConfig::from_toml("[momentum]\nstop_velocity = nan\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "momentum.stop_velocity",
                ..
            }
        ));

        let err = ParallaxConfig::from_toml("[sticky]\ncenter_offset_vh = inf\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "sticky.center_offset_vh",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_toml_reported() {
        let err = ParallaxConfig::from_toml("[momentum\nfriction = ").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToml(_)));
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ParallaxConfig::default();
        config.sticky.max_font_vw = 18.0;
        config.save_to(&path).unwrap();

        let loaded = ParallaxConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            ParallaxConfig::load_from(&path),
            Err(ConfigError::NotFound { .. })
        ));
    }
}
