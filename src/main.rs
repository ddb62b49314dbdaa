use bevy::prelude::*;
use bevy::window::WindowResolution;

use weather_sim::config::{load_weather_config, CONFIG_PATH};
use weather_sim::{graphics, rendering, simulation};

fn main() {
    // Window size comes from the config, so load it before building the app.
    let config = load_weather_config(CONFIG_PATH);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Animated Weather System".into(),
            resolution: WindowResolution::new(config.width as u32, config.height as u32),
            resizable: false,
            ..Default::default()
        }),
        // Closing the window is a simulation `Quit` so the current tick finishes first.
        close_when_requested: false,
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    .insert_resource(config)
    .add_plugins(simulation::SimulationPlugin)
    .add_systems(
        Startup,
        (
            graphics::setup_camera,
            graphics::setup_gizmo_lines,
            rendering::setup_hud,
        ),
    )
    .add_systems(
        Update,
        (
            rendering::draw_snapshot_system,
            rendering::hud_display_system,
        ),
    );

    app.run();
}
