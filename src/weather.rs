//! Discrete weather state and its transition rule.

use crate::constants::*;
use crate::particle::ParticleKind;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The five weather regimes the simulation cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherKind {
    Clear,
    Rain,
    Snow,
    Storm,
    Hail,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 5] = [
        WeatherKind::Clear,
        WeatherKind::Rain,
        WeatherKind::Snow,
        WeatherKind::Storm,
        WeatherKind::Hail,
    ];

    /// Uniformly random kind (may repeat the current one).
    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&WeatherKind::Clear)
    }

    /// Particle type falling in this weather, if any.  Storms rain.
    pub fn precipitation(self) -> Option<ParticleKind> {
        match self {
            WeatherKind::Clear => None,
            WeatherKind::Rain | WeatherKind::Storm => Some(ParticleKind::Rain),
            WeatherKind::Snow => Some(ParticleKind::Snow),
            WeatherKind::Hail => Some(ParticleKind::Hail),
        }
    }

    /// Temperature range (°C) drawn when entering this kind.
    pub fn temperature_range(self) -> (f32, f32) {
        match self {
            WeatherKind::Snow => SNOW_TEMPERATURE,
            WeatherKind::Rain => RAIN_TEMPERATURE,
            WeatherKind::Storm => STORM_TEMPERATURE,
            WeatherKind::Clear | WeatherKind::Hail => FAIR_TEMPERATURE,
        }
    }

    /// Wind range (symmetric around zero) drawn when entering this kind.
    pub fn wind_range(self) -> f32 {
        match self {
            WeatherKind::Storm => STORM_WIND_RANGE,
            _ => WIND_RANGE,
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Rain => "Rain",
            WeatherKind::Snow => "Snow",
            WeatherKind::Storm => "Storm",
            WeatherKind::Hail => "Hail",
        };
        f.write_str(name)
    }
}

/// Current weather.  `intensity` stays in [0, 1]; wind is unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherState {
    pub kind: WeatherKind,
    pub intensity: f32,
    pub wind: f32,
    /// Display only; nothing in the simulation reads it.
    pub temperature: f32,
}

impl Default for WeatherState {
    fn default() -> Self {
        Self {
            kind: WeatherKind::Clear,
            intensity: INITIAL_INTENSITY,
            wind: INITIAL_WIND,
            temperature: INITIAL_TEMPERATURE,
        }
    }
}

impl WeatherState {
    /// Fresh state for `kind` with intensity, wind and temperature drawn from
    /// their ranges.  Storms get the wider wind range.
    pub fn generate(kind: WeatherKind, rng: &mut impl Rng) -> Self {
        let intensity = rng.gen_range(INTENSITY_MIN..=INTENSITY_MAX);
        let wind_range = kind.wind_range();
        let wind = rng.gen_range(-wind_range..=wind_range);
        let (t_min, t_max) = kind.temperature_range();
        let temperature = rng.gen_range(t_min..=t_max);
        Self {
            kind,
            intensity,
            wind,
            temperature,
        }
    }

    /// Adjust intensity by `delta`, clamped to [0, 1].
    pub fn nudge_intensity(&mut self, delta: f32) {
        self.intensity = (self.intensity + delta).clamp(0.0, 1.0);
    }

    /// Adjust wind by `delta`.
    pub fn nudge_wind(&mut self, delta: f32) {
        self.wind += delta;
    }

    /// Particles to spawn this tick: `floor(intensity * base_rate)`, zero when
    /// nothing falls.
    pub fn spawn_rate(&self, base_rate: f32) -> usize {
        if self.kind.precipitation().is_none() {
            return 0;
        }
        (self.intensity * base_rate).floor().max(0.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;

    #[test]
    fn generated_ranges_per_kind() {
        let mut rng = SimRng::from_seed_u64(3);
        for _ in 0..200 {
            for kind in WeatherKind::ALL {
                let state = WeatherState::generate(kind, &mut rng);
                assert_eq!(state.kind, kind);
                assert!((INTENSITY_MIN..=INTENSITY_MAX).contains(&state.intensity));
                let w = kind.wind_range();
                assert!((-w..=w).contains(&state.wind));
                let (lo, hi) = kind.temperature_range();
                assert!((lo..=hi).contains(&state.temperature));
            }
        }
    }

    #[test]
    fn storm_wind_can_exceed_calm_range() {
        let mut rng = SimRng::from_seed_u64(11);
        let strongest = (0..500)
            .map(|_| WeatherState::generate(WeatherKind::Storm, &mut rng).wind.abs())
            .fold(0.0_f32, f32::max);
        assert!(strongest > WIND_RANGE);
    }

    #[test]
    fn intensity_is_clamped() {
        let mut state = WeatherState::default();
        for _ in 0..20 {
            state.nudge_intensity(INTENSITY_STEP);
        }
        assert_eq!(state.intensity, 1.0);
        for _ in 0..20 {
            state.nudge_intensity(-INTENSITY_STEP);
        }
        assert_eq!(state.intensity, 0.0);
    }

    #[test]
    fn wind_is_unclamped() {
        let mut state = WeatherState::default();
        for _ in 0..20 {
            state.nudge_wind(WIND_STEP);
        }
        assert_eq!(state.wind, 10.0);
    }

    #[test]
    fn spawn_rate_floors_intensity() {
        let mut state = WeatherState {
            kind: WeatherKind::Rain,
            intensity: 0.5,
            ..Default::default()
        };
        assert_eq!(state.spawn_rate(BASE_SPAWN_RATE), 10);
        state.intensity = 0.39;
        assert_eq!(state.spawn_rate(BASE_SPAWN_RATE), 7);
        state.kind = WeatherKind::Clear;
        assert_eq!(state.spawn_rate(BASE_SPAWN_RATE), 0);
    }

    #[test]
    fn storms_rain() {
        assert_eq!(WeatherKind::Storm.precipitation(), Some(ParticleKind::Rain));
        assert_eq!(WeatherKind::Hail.precipitation(), Some(ParticleKind::Hail));
        assert_eq!(WeatherKind::Clear.precipitation(), None);
    }
}
