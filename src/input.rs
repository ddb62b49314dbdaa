//! Keyboard and window input → [`Command`] queue.
//!
//! Input systems run in `Update` and only record intent in [`PendingCommands`];
//! the fixed-rate tick drains the queue.  Tests can push commands directly
//! without a real input device.
//!
//! | Key / event          | Command         |
//! |----------------------|-----------------|
//! | Space                | `ChangeWeather` |
//! | ↑ / ↓                | `IntensityUp` / `IntensityDown` |
//! | ← / →                | `WindLeft` / `WindRight` |
//! | Escape, window close | `Quit`          |

use crate::engine::Command;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

/// Commands gathered since the last simulation tick, in arrival order.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct PendingCommands(pub Vec<Command>);

/// Key binding table.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Space => Some(Command::ChangeWeather),
        KeyCode::ArrowUp => Some(Command::IntensityUp),
        KeyCode::ArrowDown => Some(Command::IntensityDown),
        KeyCode::ArrowLeft => Some(Command::WindLeft),
        KeyCode::ArrowRight => Some(Command::WindRight),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

/// Queue one command per freshly pressed bound key.
pub fn keyboard_command_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut pending: ResMut<PendingCommands>,
) {
    pending
        .0
        .extend(keys.get_just_pressed().copied().filter_map(command_for_key));
}

/// Route the window close button through the simulation as `Quit`.
pub fn window_close_command_system(
    mut closes: MessageReader<WindowCloseRequested>,
    mut pending: ResMut<PendingCommands>,
) {
    if closes.read().count() > 0 {
        pending.0.push(Command::Quit);
    }
}
