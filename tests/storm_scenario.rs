//! End-to-end engine scenarios driven only through the public API.
//!
//! Every run is seeded, so the outcome is reproducible; assertions still stick
//! to ranges and bounds rather than exact random draws.

use weather_sim::config::WeatherConfig;
use weather_sim::constants::{LIGHTNING_MAX_DEPTH, WEATHER_CHANGE_INTERVAL};
use weather_sim::engine::{Command, WeatherEngine};
use weather_sim::rng::SimRng;
use weather_sim::weather::WeatherKind;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine(seed: u64) -> WeatherEngine {
    let config = WeatherConfig {
        width: 1200.0,
        height: 800.0,
        ..Default::default()
    };
    WeatherEngine::new(&config, SimRng::from_seed_u64(seed))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A storm set on a fresh engine holds storm ranges for the whole interval,
/// strikes at least once, and hands over to a random kind on tick 600.
#[test]
fn storm_runs_until_the_automatic_transition() {
    let mut e = engine(42);
    assert_eq!(e.weather().kind, WeatherKind::Clear);
    e.set_weather(WeatherKind::Storm);

    let mut storm_ticks = 0_u64;
    for _ in 0..WEATHER_CHANGE_INTERVAL - 1 {
        let snap = e.tick(&[]);
        storm_ticks += 1;

        let w = e.weather();
        assert_eq!(w.kind, WeatherKind::Storm);
        assert!((0.3..=1.0).contains(&w.intensity));
        assert!((-5.0..=5.0).contains(&w.wind));
        assert!((10.0..=20.0).contains(&w.temperature));

        assert_eq!(snap.lightning.is_some(), e.lightning().is_active());
        if let Some(depth) = e.lightning().deepest_branch() {
            assert!(depth <= LIGHTNING_MAX_DEPTH);
        }
    }

    assert!(e.strike_count() >= 1, "600 storm ticks at 1% should strike");
    assert!(e.strike_count() <= storm_ticks);

    e.tick(&[]);
    assert_eq!(e.weather_timer(), 0, "tick 600 triggers the automatic change");
}

/// Particle population stays bounded: everything spawned is eventually culled.
#[test]
fn particle_population_reaches_steady_state() {
    let mut e = engine(7);
    e.set_weather(WeatherKind::Rain);
    e.weather_mut().intensity = 1.0;
    e.weather_mut().wind = 0.0;

    let mut peak = 0;
    for _ in 0..400 {
        let snap = e.tick(&[]);
        peak = peak.max(snap.telemetry.particle_count);
        for p in e.particles() {
            assert!(!p.is_offscreen(e.width(), e.height()));
        }
    }
    // 20 per tick, slowest rain (5 px/tick) needs ≤ 182 ticks to fall 910 px.
    assert!(peak > 0);
    assert!(peak <= 20 * 182);
}

/// Commands issued in one tick are all applied before the simulation steps.
#[test]
fn commands_apply_in_order_within_a_tick() {
    let mut e = engine(3);
    let snap = e.tick(&[
        Command::IntensityUp,
        Command::IntensityUp,
        Command::WindLeft,
        Command::WindLeft,
        Command::WindLeft,
    ]);
    assert!((snap.telemetry.intensity - 0.7).abs() < 1e-5);
    assert_eq!(snap.telemetry.wind, -1.5);
    assert!(!e.quit_requested());
}

/// Repeated intensity commands never leave [0, 1].
#[test]
fn intensity_never_escapes_unit_range() {
    let mut e = engine(5);
    for _ in 0..25 {
        let snap = e.tick(&[Command::IntensityUp]);
        assert!(snap.telemetry.intensity <= 1.0);
    }
    for _ in 0..25 {
        let snap = e.tick(&[Command::IntensityDown]);
        assert!(snap.telemetry.intensity >= 0.0);
    }
    assert_eq!(e.weather().intensity, 0.0);
}
