//! Key mapping from terminal events to thrust directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to the thrust direction it controls.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        _ => None,
    }
}

/// Map keyboard input to a thrust direction.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    map_key(key.code)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Direction::Left)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Direction::Right)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Direction::Up)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), None);
    }

    #[test]
    fn test_letter_keys() {
        assert_eq!(map_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Char('D')), Some(Direction::Right));
        assert_eq!(map_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Char('s')), None);
    }

    #[test]
    fn test_control_chords_are_not_thrust() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Up)));
    }
}
