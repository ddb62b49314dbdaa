//! Centralised simulation and presentation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Screen coordinates are used throughout the simulation: origin top-left,
//! `+y` pointing down.
//!
//! ## Tuning guidance
//!
//! Ranges are inclusive on both ends unless noted.  The runtime-tunable
//! subset is mirrored by [`crate::config::WeatherConfig`].

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Default viewport width (pixels).
pub const VIEWPORT_WIDTH: f32 = 1200.0;

/// Default viewport height (pixels).
pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// Smallest viewport width that leaves a non-empty lightning trunk range
/// (`LIGHTNING_EDGE_MARGIN` on both sides).
pub const MIN_VIEWPORT_WIDTH: f32 = 2.0 * LIGHTNING_EDGE_MARGIN as f32;

/// Fixed simulation rate (ticks per second).
pub const TICK_RATE_HZ: f64 = 60.0;

// ── Particles: Spawning & Culling ─────────────────────────────────────────────

/// Particles spawned per tick at intensity 1.0 (`floor(intensity * BASE_SPAWN_RATE)`).
pub const BASE_SPAWN_RATE: f32 = 20.0;

/// Horizontal spawn overhang beyond each screen edge.
pub const SPAWN_X_MARGIN: i32 = 50;

/// Vertical spawn band above the top edge (`y ∈ [SPAWN_Y_MIN, SPAWN_Y_MAX]`).
pub const SPAWN_Y_MIN: i32 = -50;
pub const SPAWN_Y_MAX: i32 = -10;

/// Particles further than this below the bottom edge are culled.
pub const CULL_BOTTOM_MARGIN: f32 = 50.0;

/// Particles further than this beyond the left or right edge are culled.
pub const CULL_SIDE_MARGIN: f32 = 100.0;

// ── Particles: Rain ───────────────────────────────────────────────────────────

pub const RAIN_SPEED_MIN: f32 = 5.0;
pub const RAIN_SPEED_MAX: f32 = 12.0;
pub const RAIN_SIZE_MIN: u32 = 1;
pub const RAIN_SIZE_MAX: u32 = 3;
pub const RAIN_DRIFT_RANGE: f32 = 1.0;

/// Rain streak length as a multiple of drop size.
pub const RAIN_STREAK_FACTOR: f32 = 3.0;

// ── Particles: Snow ───────────────────────────────────────────────────────────

pub const SNOW_SPEED_MIN: f32 = 1.0;
pub const SNOW_SPEED_MAX: f32 = 3.0;
pub const SNOW_SIZE_MIN: u32 = 2;
pub const SNOW_SIZE_MAX: u32 = 6;
pub const SNOW_DRIFT_RANGE: f32 = 0.5;
pub const SNOW_ROTATION_RATE_RANGE: f32 = 0.1;

/// Flakes strictly larger than this get the six-spoke crystal pattern.
pub const SNOW_SPOKE_MIN_SIZE: u32 = 3;
pub const SNOW_SPOKE_COUNT: u32 = 6;

/// Wave drift: `x += sin(y * SNOW_WAVE_FREQUENCY) * SNOW_WAVE_AMPLITUDE`.
pub const SNOW_WAVE_FREQUENCY: f32 = 0.01;
pub const SNOW_WAVE_AMPLITUDE: f32 = 0.5;

// ── Particles: Hail ───────────────────────────────────────────────────────────

pub const HAIL_SPEED_MIN: f32 = 8.0;
pub const HAIL_SPEED_MAX: f32 = 15.0;
pub const HAIL_SIZE_MIN: u32 = 3;
pub const HAIL_SIZE_MAX: u32 = 8;
pub const HAIL_DRIFT_RANGE: f32 = 2.0;

/// Reserved bounce height range; drawn at spawn, no bounce physics reads it.
pub const HAIL_BOUNCE_MIN: u32 = 5;
pub const HAIL_BOUNCE_MAX: u32 = 15;

// ── Lightning ─────────────────────────────────────────────────────────────────

/// Ticks a strike stays visible.
pub const LIGHTNING_DURATION: u32 = 10;

/// Hard recursion cap for branch generation.
pub const LIGHTNING_MAX_DEPTH: u32 = 6;

/// Trunk start x is drawn from `[LIGHTNING_EDGE_MARGIN, width - LIGHTNING_EDGE_MARGIN]`.
pub const LIGHTNING_EDGE_MARGIN: i32 = 100;

/// Trunk end x offset from the start x.
pub const LIGHTNING_TRUNK_SWAY: i32 = 50;

pub const LIGHTNING_SEGMENTS_MIN: u32 = 5;
pub const LIGHTNING_SEGMENTS_MAX: u32 = 15;

/// Horizontal jitter applied to interior polyline points.
pub const LIGHTNING_JITTER: i32 = 30;

/// Chance that a branch forks a sub-branch.
pub const LIGHTNING_FORK_CHANCE: f64 = 0.3;

/// Sub-branch end offsets: `x ± FORK_SPREAD`, `y + [FORK_DROP_MIN, FORK_DROP_MAX]`.
pub const LIGHTNING_FORK_SPREAD: i32 = 100;
pub const LIGHTNING_FORK_DROP_MIN: i32 = 50;
pub const LIGHTNING_FORK_DROP_MAX: i32 = 150;

/// Peak alpha of the full-screen flash (scaled by remaining duration fraction).
pub const LIGHTNING_FLASH_ALPHA: f32 = 0.3;

/// Per-tick strike probability while the weather is `Storm`.
pub const STORM_STRIKE_CHANCE: f64 = 0.01;

// ── Clouds ────────────────────────────────────────────────────────────────────

pub const CLOUD_CIRCLES_MIN: usize = 5;
pub const CLOUD_CIRCLES_MAX: usize = 12;
pub const CLOUD_OFFSET_X: i32 = 50;
pub const CLOUD_OFFSET_Y: i32 = 20;
pub const CLOUD_RADIUS_MIN: u32 = 20;
pub const CLOUD_RADIUS_MAX: u32 = 60;
pub const CLOUD_DARKNESS_MIN: f32 = 0.3;
pub const CLOUD_DARKNESS_MAX: f32 = 0.8;

/// Clouds move at this fraction of the wind strength.
pub const CLOUD_DRIFT_FACTOR: f32 = 0.1;

/// Clouds wrap once they are this far past either edge.
pub const CLOUD_WRAP_MARGIN: f32 = 200.0;

/// Initial cloud population and placement.
pub const INITIAL_CLOUDS_MIN: usize = 3;
pub const INITIAL_CLOUDS_MAX: usize = 8;
pub const INITIAL_CLOUD_X_MARGIN: i32 = 100;
pub const INITIAL_CLOUD_Y_MIN: i32 = 50;
pub const INITIAL_CLOUD_Y_MAX: i32 = 200;

// ── Weather State ─────────────────────────────────────────────────────────────

/// Ticks between automatic weather transitions (10 s at 60 Hz).
pub const WEATHER_CHANGE_INTERVAL: u32 = 600;

pub const INITIAL_INTENSITY: f32 = 0.5;
pub const INITIAL_WIND: f32 = 0.0;
pub const INITIAL_TEMPERATURE: f32 = 20.0;

pub const INTENSITY_MIN: f32 = 0.3;
pub const INTENSITY_MAX: f32 = 1.0;
pub const WIND_RANGE: f32 = 2.0;
pub const STORM_WIND_RANGE: f32 = 5.0;

/// Step applied by the IntensityUp / IntensityDown commands.
pub const INTENSITY_STEP: f32 = 0.1;

/// Step applied by the WindLeft / WindRight commands.
pub const WIND_STEP: f32 = 0.5;

/// Temperature ranges (°C) drawn on each transition.
pub const SNOW_TEMPERATURE: (f32, f32) = (-10.0, 5.0);
pub const RAIN_TEMPERATURE: (f32, f32) = (5.0, 25.0);
pub const STORM_TEMPERATURE: (f32, f32) = (10.0, 20.0);
pub const FAIR_TEMPERATURE: (f32, f32) = (15.0, 30.0);

// ── HUD ───────────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 18.0;
