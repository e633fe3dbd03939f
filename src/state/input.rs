use crate::model::Direction;

/// A player intent decoded from a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    /// Space: start when idle, otherwise pause/resume.
    StartOrToggle,
    TogglePause,
    Restart,
}

impl Command {
    /// Whether the browser's default action for the key should be suppressed.
    pub fn swallows_key(self) -> bool {
        !matches!(self, Command::Restart)
    }
}

/// Maps a `KeyboardEvent.key` value to a command.
pub fn key_command(key: &str) -> Option<Command> {
    let cmd = match key.to_lowercase().as_str() {
        "arrowup" | "w" => Command::Steer(Direction::UP),
        "arrowdown" | "s" => Command::Steer(Direction::DOWN),
        "arrowleft" | "a" => Command::Steer(Direction::LEFT),
        "arrowright" | "d" => Command::Steer(Direction::RIGHT),
        " " | "spacebar" => Command::StartOrToggle,
        "p" => Command::TogglePause,
        "r" => Command::Restart,
        _ => return None,
    };
    Some(cmd)
}

/// Accepts `wanted` unless it would reverse the committed heading.
pub fn arbitrate(current: Direction, wanted: Direction) -> Option<Direction> {
    if wanted.is_reversal_of(current) {
        None
    } else {
        Some(wanted)
    }
}
