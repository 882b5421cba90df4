use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical inputs, independent of the physical key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    SoftDrop,
    Rotate,
    TogglePause,
    Acknowledge,
    Quit,
}

impl Action {
    /// Only presses count; repeats and releases are ignored.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::Left,
            KeyCode::Right | KeyCode::Char('l') => Action::Right,
            KeyCode::Down | KeyCode::Char('j') => Action::SoftDrop,
            KeyCode::Up | KeyCode::Char('k') => Action::Rotate,
            KeyCode::Char('p') | KeyCode::Char('P') => Action::TogglePause,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Action::Acknowledge,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}
