//! Runtime configuration loaded from `assets/weather.toml`.
//!
//! [`WeatherConfig`] is a Bevy [`Resource`] that mirrors the tunable subset of
//! [`crate::constants`].  Before the app starts, [`load_weather_config`] reads
//! `assets/weather.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about:
//!
//! ```toml
//! width = 1600.0
//! height = 900.0
//! seed = 7
//! ```
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `WeatherConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_change_interval, validate_spawn_rate, validate_tick_rate, validate_viewport,
    SimError, SimResult,
};
use bevy::prelude::Resource;
use serde::Deserialize;

/// Default location of the optional config file.
pub const CONFIG_PATH: &str = "assets/weather.toml";

/// Runtime-tunable simulation configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    // ── Viewport ─────────────────────────────────────────────────────────────
    pub width: f32,
    pub height: f32,

    // ── Timing ───────────────────────────────────────────────────────────────
    pub tick_rate_hz: f64,
    pub weather_change_interval: u32,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub base_spawn_rate: f32,
    pub initial_clouds_min: usize,
    pub initial_clouds_max: usize,

    // ── Randomness ───────────────────────────────────────────────────────────
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,
            weather_change_interval: WEATHER_CHANGE_INTERVAL,
            base_spawn_rate: BASE_SPAWN_RATE,
            initial_clouds_min: INITIAL_CLOUDS_MIN,
            initial_clouds_max: INITIAL_CLOUDS_MAX,
            seed: None,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl WeatherConfig {
    /// Check every value the engine relies on.
    pub fn validate(&self) -> SimResult<()> {
        validate_viewport(self.width, self.height)?;
        validate_tick_rate(self.tick_rate_hz)?;
        validate_change_interval(self.weather_change_interval)?;
        validate_spawn_rate(self.base_spawn_rate)?;
        if self.initial_clouds_min > self.initial_clouds_max {
            return Err(SimError::UnsafeConstant {
                name: "INITIAL_CLOUDS_MIN",
                value: self.initial_clouds_min as f64,
                safe_range: "[0, INITIAL_CLOUDS_MAX]",
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.  `path` is only used in error text.
    pub fn from_toml_str(contents: &str, path: &str) -> SimResult<Self> {
        let loaded: Self = toml::from_str(contents).map_err(|e| SimError::ConfigParse {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        loaded.validate()?;
        Ok(loaded)
    }
}

/// Read [`CONFIG_PATH`] (or any `path`) into a `WeatherConfig`.
///
/// Runs before the Bevy app is built because the window size depends on it,
/// so it reports to stdout/stderr instead of the Bevy logger.  Missing keys
/// retain their compiled defaults.  Parse or validation errors are printed but
/// do not abort the simulation.  A missing file is not an error.
pub fn load_weather_config(path: &str) -> WeatherConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match WeatherConfig::from_toml_str(&contents, path) {
            Ok(loaded) => {
                println!("✓ Loaded weather config from {path}");
                loaded
            }
            Err(e) => {
                eprintln!("⚠ {e}; using defaults");
                WeatherConfig::default()
            }
        },
        Err(_) => {
            println!("ℹ No {path} found; using compiled defaults");
            WeatherConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(WeatherConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = WeatherConfig::from_toml_str("width = 1600.0\nseed = 7\n", "test.toml")
            .expect("partial config should parse");
        assert_eq!(config.width, 1600.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.height, VIEWPORT_HEIGHT);
        assert_eq!(config.weather_change_interval, WEATHER_CHANGE_INTERVAL);
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err = WeatherConfig::from_toml_str("width = [", "bad.toml").unwrap_err();
        assert!(matches!(err, SimError::ConfigParse { ref path, .. } if path == "bad.toml"));
    }

    #[test]
    fn narrow_viewport_fails_validation() {
        let err = WeatherConfig::from_toml_str("width = 150.0", "narrow.toml").unwrap_err();
        assert!(matches!(err, SimError::InvalidViewport { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_weather_config("does/not/exist/weather.toml");
        assert_eq!(config, WeatherConfig::default());
    }

    #[test]
    fn inverted_cloud_range_fails_validation() {
        let config = WeatherConfig {
            initial_clouds_min: 9,
            initial_clouds_max: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
