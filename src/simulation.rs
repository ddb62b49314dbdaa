//! Simulation plugin: fixed-rate weather ticks driven by the Bevy scheduler.
//!
//! | System                        | Schedule     | Purpose                               |
//! |-------------------------------|--------------|---------------------------------------|
//! | `spawn_weather_engine`        | Startup      | Build the engine from `WeatherConfig` |
//! | `keyboard_command_system`     | Update       | Queue key presses as commands         |
//! | `window_close_command_system` | Update       | Queue window close as `Quit`          |
//! | `weather_tick_system`         | FixedUpdate  | Drain commands, tick, store snapshot  |

use crate::config::WeatherConfig;
use crate::engine::WeatherEngine;
use crate::input::{keyboard_command_system, window_close_command_system, PendingCommands};
use crate::render::RenderSnapshot;
use bevy::prelude::*;

/// Latest frame produced by the engine; `None` until the first tick.
#[derive(Resource, Default, Debug)]
pub struct FrameSnapshot(pub Option<RenderSnapshot>);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let hz = app
            .world()
            .get_resource::<WeatherConfig>()
            .map_or(crate::constants::TICK_RATE_HZ, |c| c.tick_rate_hz);

        app.insert_resource(Time::<Fixed>::from_hz(hz))
            .init_resource::<PendingCommands>()
            .init_resource::<FrameSnapshot>()
            .add_systems(Startup, spawn_weather_engine)
            .add_systems(
                Update,
                (keyboard_command_system, window_close_command_system),
            )
            .add_systems(FixedUpdate, weather_tick_system);
    }
}

/// Startup system: build the engine (seeded from the config when a seed is set).
pub fn spawn_weather_engine(mut commands: Commands, config: Res<WeatherConfig>) {
    commands.insert_resource(WeatherEngine::from_config(&config));
}

/// Advance the simulation by one tick.
///
/// A `Quit` command lets the tick complete, then requests app exit.
pub fn weather_tick_system(
    mut engine: ResMut<WeatherEngine>,
    mut pending: ResMut<PendingCommands>,
    mut frame: ResMut<FrameSnapshot>,
    mut exit: MessageWriter<AppExit>,
) {
    let commands = std::mem::take(&mut pending.0);
    frame.0 = Some(engine.tick(&commands));

    if engine.quit_requested() {
        exit.write(AppExit::Success);
    }
}
