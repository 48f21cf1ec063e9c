//! Key mapping from terminal events to engine commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Forward to the engine as-is.
    Command(Command),
    /// Rotate while playing; start a new game otherwise.
    RotateOrStart,
    /// Begin holding soft drop (released by key-up or the grace latch).
    SoftDropHold,
}

/// Map a key press to an intent.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(KeyIntent::Command(Command::MoveLeft)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(KeyIntent::Command(Command::MoveRight)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(KeyIntent::SoftDropHold),

        // Rotation doubles as the start button.
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char(' ') => Some(KeyIntent::RotateOrStart),

        // Restart
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(KeyIntent::Command(Command::Start))
        }

        _ => None,
    }
}

/// Whether releasing this key ends a soft drop.
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down
            | KeyCode::Char('j')
            | KeyCode::Char('J')
            | KeyCode::Char('s')
            | KeyCode::Char('S')
    )
}

/// Resolve a rotate-or-start press against the engine's phase.
pub fn resolve_rotate(running: bool) -> Command {
    if running {
        Command::Rotate
    } else {
        Command::Start
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
