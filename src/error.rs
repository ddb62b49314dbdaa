//! Configuration and startup error types.
//!
//! The simulation core has no recoverable failures: every input is either an
//! internally generated random draw or a clamped user command.  These types
//! cover the edges around it, namely loading and validating [`WeatherConfig`].
//!
//! ## Usage
//!
//! ```rust
//! use weather_sim::config::WeatherConfig;
//! use weather_sim::error::SimError;
//!
//! let mut config = WeatherConfig::default();
//! config.width = 120.0;
//! assert!(matches!(config.validate(), Err(SimError::InvalidViewport { .. })));
//! ```
//!
//! [`WeatherConfig`]: crate::config::WeatherConfig

use std::fmt;

/// Top-level error enum for the weather simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The viewport is too small to host the simulation (lightning needs
    /// `MIN_VIEWPORT_WIDTH` horizontally, and both dimensions must be positive).
    InvalidViewport {
        width: f32,
        height: f32,
    },

    /// A tunable constant is outside its safe operating range.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// The config file exists but could not be parsed.
    ConfigParse {
        path: String,
        message: String,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidViewport { width, height } => write!(
                f,
                "viewport {}x{} is invalid: width must be at least {} and height positive",
                width,
                height,
                crate::constants::MIN_VIEWPORT_WIDTH
            ),
            SimError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            SimError::ConfigParse { path, message } => {
                write!(f, "failed to parse {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Convenience alias: a `Result` using `SimError` as the error type.
pub type SimResult<T> = Result<T, SimError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless the viewport can host lightning strikes.
pub fn validate_viewport(width: f32, height: f32) -> SimResult<()> {
    let width_ok = width.is_finite() && width >= crate::constants::MIN_VIEWPORT_WIDTH;
    let height_ok = height.is_finite() && height > 0.0;
    if width_ok && height_ok {
        Ok(())
    } else {
        Err(SimError::InvalidViewport { width, height })
    }
}

/// Returns an error if `tick_rate` is not a positive, finite frequency.
pub fn validate_tick_rate(value: f64) -> SimResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name: "TICK_RATE_HZ",
            value,
            safe_range: "(0.0, ∞)",
        })
    }
}

/// Returns an error if the automatic transition interval is zero.
pub fn validate_change_interval(value: u32) -> SimResult<()> {
    if value == 0 {
        Err(SimError::UnsafeConstant {
            name: "WEATHER_CHANGE_INTERVAL",
            value: f64::from(value),
            safe_range: "[1, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if the base spawn rate is negative or not finite.
pub fn validate_spawn_rate(value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::UnsafeConstant {
            name: "BASE_SPAWN_RATE",
            value: f64::from(value),
            safe_range: "[0.0, ∞)",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_must_fit_lightning_margins() {
        assert!(validate_viewport(1200.0, 800.0).is_ok());
        assert!(validate_viewport(200.0, 1.0).is_ok());
        assert_eq!(
            validate_viewport(199.0, 800.0),
            Err(SimError::InvalidViewport {
                width: 199.0,
                height: 800.0
            })
        );
        assert!(validate_viewport(1200.0, 0.0).is_err());
        assert!(validate_viewport(f32::NAN, 800.0).is_err());
    }

    #[test]
    fn tick_rate_rejects_zero_and_infinity() {
        assert!(validate_tick_rate(60.0).is_ok());
        assert!(validate_tick_rate(0.0).is_err());
        assert!(validate_tick_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn zero_change_interval_is_rejected() {
        assert!(validate_change_interval(600).is_ok());
        assert!(validate_change_interval(0).is_err());
    }

    #[test]
    fn display_names_the_constant() {
        let err = validate_spawn_rate(-1.0).unwrap_err();
        assert!(err.to_string().contains("BASE_SPAWN_RATE"));
    }
}
