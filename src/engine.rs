//! Weather simulation engine: owns every entity and steps them one tick at a time.
//!
//! ## Tick pipeline
//!
//! | Step | Method              | Effect                                              |
//! |------|---------------------|-----------------------------------------------------|
//! | 1    | `apply_input`       | Weather / intensity / wind commands, quit flag      |
//! | 2    | `auto_transition`   | Random weather every `weather_change_interval` ticks |
//! | 3    | `spawn_tick`        | `floor(intensity * 20)` new particles above the top |
//! | 4    | `update_tick`       | Move + cull particles, drift + wrap clouds, bolt    |
//! | 5    | `snapshot`          | Immutable [`RenderSnapshot`] for the renderer       |
//!
//! The engine never sleeps or measures time; pacing is the caller's job.
//! All randomness comes from the engine's own [`SimRng`], so a fixed seed
//! replays the exact same weather.

use crate::cloud::Cloud;
use crate::config::WeatherConfig;
use crate::constants::*;
use crate::lightning::LightningBolt;
use crate::particle::Particle;
use crate::render::{RenderSnapshot, Shape, SkyGradient, Telemetry};
use crate::rng::SimRng;
use crate::weather::{WeatherKind, WeatherState};
use bevy::log::{debug, info, warn};
use bevy::prelude::Resource;
use rand::Rng;

/// User intent, already mapped from raw input by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    ChangeWeather,
    IntensityUp,
    IntensityDown,
    WindLeft,
    WindRight,
    Quit,
}

/// Owner of the weather state, particles, clouds, and lightning bolt.
#[derive(Resource, Debug)]
pub struct WeatherEngine {
    width: f32,
    height: f32,
    base_spawn_rate: f32,
    change_interval: u32,
    weather: WeatherState,
    particles: Vec<Particle>,
    clouds: Vec<Cloud>,
    lightning: LightningBolt,
    /// Ticks since the last automatic transition.  Manual changes leave it alone.
    weather_timer: u32,
    ticks: u64,
    strikes: u64,
    quit_requested: bool,
    rng: SimRng,
}

impl WeatherEngine {
    /// Clear skies, a handful of clouds, no particles.
    ///
    /// A config that fails [`WeatherConfig::validate`] is replaced by the
    /// defaults.
    pub fn new(config: &WeatherConfig, mut rng: SimRng) -> Self {
        let fallback;
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid weather config ({e}), using defaults");
                fallback = WeatherConfig::default();
                &fallback
            }
        };
        let (width, height) = (config.width, config.height);
        let cloud_count = rng.gen_range(config.initial_clouds_min..=config.initial_clouds_max);
        let clouds = (0..cloud_count)
            .map(|_| {
                let x = rng.gen_range(-INITIAL_CLOUD_X_MARGIN..=width as i32 + INITIAL_CLOUD_X_MARGIN);
                let y = rng.gen_range(INITIAL_CLOUD_Y_MIN..=INITIAL_CLOUD_Y_MAX);
                Cloud::spawn(x as f32, y as f32, &mut rng)
            })
            .collect();

        info!(
            "Weather engine ready: {}x{} viewport, {} clouds",
            width, height, cloud_count
        );

        Self {
            width,
            height,
            base_spawn_rate: config.base_spawn_rate,
            change_interval: config.weather_change_interval,
            weather: WeatherState::default(),
            particles: Vec::new(),
            clouds,
            lightning: LightningBolt::new(width, height),
            weather_timer: 0,
            ticks: 0,
            strikes: 0,
            quit_requested: false,
            rng,
        }
    }

    /// Engine seeded from `config.seed` (or entropy when unset).
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config, SimRng::from_optional_seed(config.seed))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    /// Direct access for shells and tests that need to pin intensity or wind.
    pub fn weather_mut(&mut self) -> &mut WeatherState {
        &mut self.weather
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn lightning(&self) -> &LightningBolt {
        &self.lightning
    }

    pub fn weather_timer(&self) -> u32 {
        self.weather_timer
    }

    /// Ticks completed since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Lightning strikes triggered since construction.
    pub fn strike_count(&self) -> u64 {
        self.strikes
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // ── Weather state ─────────────────────────────────────────────────────────

    /// Replace the weather with a freshly drawn state of `kind`.
    pub fn set_weather(&mut self, kind: WeatherKind) {
        self.weather = WeatherState::generate(kind, &mut self.rng);
        info!(
            "Weather -> {} (intensity {:.2}, wind {:.2}, {:.1}°C)",
            self.weather.kind, self.weather.intensity, self.weather.wind, self.weather.temperature
        );
    }

    /// Switch to a uniformly random kind (possibly the current one).
    pub fn change_weather(&mut self) {
        let kind = WeatherKind::random(&mut self.rng);
        self.set_weather(kind);
    }

    /// Apply one user command.  `ChangeWeather` does not reset the automatic
    /// transition timer.
    pub fn apply_input(&mut self, command: Command) {
        match command {
            Command::ChangeWeather => self.change_weather(),
            Command::IntensityUp => self.weather.nudge_intensity(INTENSITY_STEP),
            Command::IntensityDown => self.weather.nudge_intensity(-INTENSITY_STEP),
            Command::WindLeft => self.weather.nudge_wind(-WIND_STEP),
            Command::WindRight => self.weather.nudge_wind(WIND_STEP),
            Command::Quit => {
                info!("Quit requested");
                self.quit_requested = true;
            }
        }
    }

    /// Count one tick toward the next automatic transition; transition and
    /// restart the count once the interval is reached.
    pub fn auto_transition(&mut self) {
        self.weather_timer += 1;
        if self.weather_timer >= self.change_interval {
            debug!("Automatic weather transition after {} ticks", self.weather_timer);
            self.change_weather();
            self.weather_timer = 0;
        }
    }

    // ── Simulation steps ──────────────────────────────────────────────────────

    /// Spawn this tick's particles in the band above the viewport.
    pub fn spawn_tick(&mut self) {
        let Some(kind) = self.weather.kind.precipitation() else {
            return;
        };
        let count = self.weather.spawn_rate(self.base_spawn_rate);
        let max_x = self.width as i32 + SPAWN_X_MARGIN;

        self.particles.reserve(count);
        for _ in 0..count {
            let x = self.rng.gen_range(-SPAWN_X_MARGIN..=max_x);
            let y = self.rng.gen_range(SPAWN_Y_MIN..=SPAWN_Y_MAX);
            self.particles
                .push(Particle::spawn(kind, x as f32, y as f32, &mut self.rng));
        }
    }

    /// Move every entity one tick, cull escaped particles, wrap clouds, and
    /// roll for a storm strike.
    pub fn update_tick(&mut self) {
        let (width, height, wind) = (self.width, self.height, self.weather.wind);

        self.particles.retain_mut(|p| {
            p.advance(wind);
            !p.is_offscreen(width, height)
        });

        for cloud in &mut self.clouds {
            cloud.advance(wind);
            cloud.position.x = wrap_cloud_x(cloud.position.x, width);
        }

        self.lightning.advance();
        if self.weather.kind == WeatherKind::Storm && self.rng.gen_bool(STORM_STRIKE_CHANCE) {
            self.lightning.strike(&mut self.rng);
            self.strikes += 1;
            debug!(
                "Lightning strike #{} with {} branches",
                self.strikes,
                self.lightning.branches().len()
            );
        }
    }

    /// Run one full frame and describe the result.
    ///
    /// A `Quit` command still lets the tick finish; check
    /// [`quit_requested`](Self::quit_requested) afterwards.
    pub fn tick(&mut self, commands: &[Command]) -> RenderSnapshot {
        for &command in commands {
            self.apply_input(command);
        }
        self.auto_transition();
        self.spawn_tick();
        self.update_tick();
        self.ticks += 1;
        self.snapshot()
    }

    /// Current frame as renderer-agnostic shapes.
    pub fn snapshot(&self) -> RenderSnapshot {
        let clouds = self
            .clouds
            .iter()
            .flat_map(Cloud::render_spec)
            .filter_map(Shape::sanitized)
            .collect();
        let particles = self
            .particles
            .iter()
            .flat_map(Particle::render_spec)
            .filter_map(Shape::sanitized)
            .collect();

        RenderSnapshot {
            width: self.width,
            height: self.height,
            sky: SkyGradient::for_weather(self.weather.kind),
            clouds,
            particles,
            lightning: self.lightning.render_spec(),
            telemetry: Telemetry {
                kind: self.weather.kind,
                temperature: self.weather.temperature,
                wind: self.weather.wind,
                intensity: self.weather.intensity,
                particle_count: self.particles.len(),
            },
        }
    }
}

/// Clouds fully past an edge margin reappear at the opposite margin.
fn wrap_cloud_x(x: f32, width: f32) -> f32 {
    if x > width + CLOUD_WRAP_MARGIN {
        -CLOUD_WRAP_MARGIN
    } else if x < -CLOUD_WRAP_MARGIN {
        width + CLOUD_WRAP_MARGIN
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleKind;
    use bevy::math::Vec2;

    fn engine(seed: u64) -> WeatherEngine {
        WeatherEngine::new(&WeatherConfig::default(), SimRng::from_seed_u64(seed))
    }

    #[test]
    fn starts_clear_with_clouds() {
        let e = engine(1);
        assert_eq!(*e.weather(), WeatherState::default());
        assert!((INITIAL_CLOUDS_MIN..=INITIAL_CLOUDS_MAX).contains(&e.clouds().len()));
        for cloud in e.clouds() {
            assert!(cloud.position.x >= -100.0 && cloud.position.x <= 1300.0);
            assert!(cloud.position.y >= 50.0 && cloud.position.y <= 200.0);
        }
        assert!(e.particles().is_empty());
        assert!(!e.lightning().is_active());
    }

    #[test]
    fn clear_weather_spawns_nothing() {
        let mut e = engine(2);
        e.spawn_tick();
        assert!(e.particles().is_empty());
    }

    #[test]
    fn half_intensity_spawns_ten_per_tick() {
        let mut e = engine(3);
        *e.weather_mut() = WeatherState {
            kind: WeatherKind::Snow,
            intensity: 0.5,
            ..Default::default()
        };
        e.spawn_tick();
        assert_eq!(e.particles().len(), 10);
        for p in e.particles() {
            assert_eq!(p.kind(), ParticleKind::Snow);
            assert!(p.position.x >= -50.0 && p.position.x <= 1250.0);
            assert!(p.position.y >= -50.0 && p.position.y <= -10.0);
        }
        e.spawn_tick();
        assert_eq!(e.particles().len(), 20);
    }

    #[test]
    fn storm_spawns_rain() {
        let mut e = engine(4);
        e.weather_mut().kind = WeatherKind::Storm;
        e.spawn_tick();
        assert!(!e.particles().is_empty());
        assert!(e.particles().iter().all(|p| p.kind() == ParticleKind::Rain));
    }

    #[test]
    fn escaped_particles_are_culled() {
        let mut e = engine(5);
        e.weather_mut().kind = WeatherKind::Hail;
        e.spawn_tick();
        let n = e.particles.len();
        assert!(n >= 3);
        e.particles[0].position = Vec2::new(600.0, 900.0);
        e.particles[1].position = Vec2::new(-150.0, 100.0);
        e.particles[2].position = Vec2::new(1350.0, 100.0);
        e.update_tick();
        assert_eq!(e.particles().len(), n - 3);
        assert!(e
            .particles()
            .iter()
            .all(|p| !p.is_offscreen(e.width(), e.height())));
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        let config = WeatherConfig {
            width: 50.0,
            initial_clouds_min: 9,
            initial_clouds_max: 3,
            ..Default::default()
        };
        let e = WeatherEngine::new(&config, SimRng::from_seed_u64(10));
        let defaults = WeatherConfig::default();
        assert_eq!(e.width(), defaults.width);
        assert!((defaults.initial_clouds_min..=defaults.initial_clouds_max)
            .contains(&e.clouds().len()));
    }

    #[test]
    fn cloud_wrap_lands_on_opposite_margin() {
        assert_eq!(wrap_cloud_x(1401.0, 1200.0), -200.0);
        assert_eq!(wrap_cloud_x(-200.5, 1200.0), 1400.0);
        // Exactly on either margin stays put.
        assert_eq!(wrap_cloud_x(-200.0, 1200.0), -200.0);
        assert_eq!(wrap_cloud_x(1400.0, 1200.0), 1400.0);
    }

    #[test]
    fn clouds_wrap_on_update() {
        let mut e = engine(6);
        e.weather_mut().wind = 0.0;
        e.clouds[0].position.x = 1401.0;
        if e.clouds.len() > 1 {
            e.clouds[1].position.x = -201.0;
        }
        e.update_tick();
        assert_eq!(e.clouds()[0].position.x, -200.0);
        if e.clouds.len() > 1 {
            assert_eq!(e.clouds()[1].position.x, 1400.0);
        }
    }

    #[test]
    fn intensity_commands_clamp() {
        let mut e = engine(7);
        for _ in 0..30 {
            e.apply_input(Command::IntensityUp);
            assert!(e.weather().intensity <= 1.0);
        }
        assert_eq!(e.weather().intensity, 1.0);
        for _ in 0..30 {
            e.apply_input(Command::IntensityDown);
            assert!(e.weather().intensity >= 0.0);
        }
        assert_eq!(e.weather().intensity, 0.0);
    }

    #[test]
    fn wind_commands_step_by_half() {
        let mut e = engine(8);
        e.apply_input(Command::WindRight);
        e.apply_input(Command::WindRight);
        e.apply_input(Command::WindLeft);
        assert_eq!(e.weather().wind, 0.5);
    }

    #[test]
    fn manual_change_keeps_transition_timer() {
        let mut e = engine(9);
        for _ in 0..100 {
            e.tick(&[]);
        }
        assert_eq!(e.weather_timer(), 100);
        e.tick(&[Command::ChangeWeather]);
        assert_eq!(e.weather_timer(), 101);
    }

    #[test]
    fn automatic_transition_resets_timer() {
        let mut e = engine(10);
        for _ in 0..WEATHER_CHANGE_INTERVAL - 1 {
            e.auto_transition();
        }
        assert_eq!(e.weather_timer(), WEATHER_CHANGE_INTERVAL - 1);
        let before = *e.weather();
        e.auto_transition();
        assert_eq!(e.weather_timer(), 0);
        // A fresh draw always replaces intensity, even if the kind repeats.
        assert_ne!(e.weather().intensity, before.intensity);
    }

    #[test]
    fn quit_finishes_the_tick() {
        let mut e = engine(11);
        e.weather_mut().kind = WeatherKind::Rain;
        let snapshot = e.tick(&[Command::Quit]);
        assert!(e.quit_requested());
        assert_eq!(e.ticks(), 1);
        assert_eq!(snapshot.telemetry.particle_count, e.particles().len());
        assert!(!snapshot.particles.is_empty());
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = engine(12);
        let mut b = engine(12);
        a.set_weather(WeatherKind::Storm);
        b.set_weather(WeatherKind::Storm);
        for _ in 0..120 {
            assert_eq!(a.tick(&[]), b.tick(&[]));
        }
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut e = engine(13);
        e.set_weather(WeatherKind::Snow);
        let snap = e.tick(&[]);
        assert_eq!(snap.sky, SkyGradient::for_weather(WeatherKind::Snow));
        assert_eq!(snap.telemetry.kind, WeatherKind::Snow);
        assert_eq!(snap.width, 1200.0);
        let puffs: usize = e.clouds().iter().map(|c| c.puffs().len()).sum();
        assert_eq!(snap.clouds.len(), puffs);
        assert!(snap.lightning.is_none());
    }
}
