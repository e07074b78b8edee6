use macroquad::prelude::*;

/// Requests the keyboard and mouse can make of the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Step,
    Restart,
    ToggleMenu,
    /// Flip the cell under the cursor
    ToggleHovered,
    SpeedUp,
    SlowDown,
}

const KEY_BINDINGS: [(KeyCode, Command); 8] = [
    (KeyCode::P, Command::TogglePause),
    (KeyCode::Enter, Command::Step),
    (KeyCode::R, Command::Restart),
    (KeyCode::M, Command::ToggleMenu),
    (KeyCode::GraveAccent, Command::ToggleMenu),
    (KeyCode::Space, Command::ToggleHovered),
    (KeyCode::Up, Command::SpeedUp),
    (KeyCode::Down, Command::SlowDown),
];

/// Commands for keys pressed this frame
pub fn keyboard_commands() -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, command)| command)
        .collect()
}

/// Commands from mouse buttons this frame.
///
/// `over_menu` suppresses cell toggling while the cursor is on the panel.
pub fn mouse_commands(over_menu: bool) -> Vec<Command> {
    let mut commands = Vec::new();
    if is_mouse_button_pressed(MouseButton::Left) && !over_menu {
        commands.push(Command::ToggleHovered);
    }
    if is_mouse_button_pressed(MouseButton::Right) {
        commands.push(Command::ToggleMenu);
    }
    commands
}
