use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Previous,
    /// Zero-based slide index
    GoTo(usize),
    First,
    Last,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Slide navigation
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Left, KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Right, KeyModifiers::NONE) => Action::Next,

        // Jump to slide
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoTo(c as usize - '1' as usize)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::First,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::Char('G'), KeyModifiers::NONE) => {
            Action::Last
        }
        (KeyCode::End, _) => Action::Last,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::Previous);
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::Next);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::Next);
    }

    #[test]
    fn test_digit_jumps_are_zero_based() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1'))), Action::GoTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('9'))), Action::GoTo(8));
        assert_eq!(handle_key_event(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        // Plain 'c' does nothing
        assert_eq!(handle_key_event(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_first_last() {
        assert_eq!(handle_key_event(key(KeyCode::Home)), Action::First);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Action::Last
        );
    }
}
