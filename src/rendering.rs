//! Rendering systems: frame painting and the telemetry HUD.
//!
//! ## Layer Model
//!
//! | Layer            | Technology | Source                       |
//! |------------------|------------|------------------------------|
//! | Sky gradient     | Gizmos     | `RenderSnapshot::sky`        |
//! | Clouds           | Gizmos     | `RenderSnapshot::clouds`     |
//! | Particles        | Gizmos     | `RenderSnapshot::particles`  |
//! | Flash + bolts    | Gizmos     | `RenderSnapshot::lightning`  |
//! | HUD text         | Bevy UI    | `RenderSnapshot::telemetry`  |
//!
//! ## System Responsibilities
//!
//! | System                 | Schedule | Purpose                              |
//! |------------------------|----------|--------------------------------------|
//! | `setup_hud`            | Startup  | Spawn the top-left HUD text node     |
//! | `draw_snapshot_system` | Update   | Paint the latest snapshot via gizmos |
//! | `hud_display_system`   | Update   | Refresh HUD text from telemetry      |

use crate::config::WeatherConfig;
use crate::graphics::GizmoSurface;
use crate::simulation::FrameSnapshot;
use bevy::prelude::*;

/// Marker for the HUD root node.
#[derive(Component)]
pub struct HudDisplay;

/// Spawn the HUD panel in the top-left corner.
pub fn setup_hud(mut commands: Commands, config: Res<WeatherConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(5.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            HudDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Paint the most recent snapshot.  Gizmos are immediate-mode, so this runs
/// every frame even when no simulation tick happened.
pub fn draw_snapshot_system(frame: Res<FrameSnapshot>, mut gizmos: Gizmos) {
    let Some(snapshot) = &frame.0 else {
        return;
    };
    let mut surface = GizmoSurface::new(&mut gizmos, snapshot.width, snapshot.height);
    snapshot.draw(&mut surface);
}

/// Rewrite the HUD text whenever a new snapshot lands.
pub fn hud_display_system(
    frame: Res<FrameSnapshot>,
    parent_query: Query<&Children, With<HudDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !frame.is_changed() {
        return;
    }
    let Some(snapshot) = &frame.0 else {
        return;
    };
    let content = snapshot.telemetry.hud_lines().join("\n");
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(content.clone());
            }
        }
    }
}
