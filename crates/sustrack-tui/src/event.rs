//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::time::Duration;
use sustrack_app::message::Message;
use sustrack_app::InputKey;
use sustrack_core::prelude::*;

/// Poll timeout; a timeout becomes a `Tick` that drives the spinner
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_char_conversion() {
        assert_eq!(key_event_to_input(key(KeyCode::Char('7'))), Some(InputKey::Char('7')));
        assert_eq!(key_event_to_input(key(KeyCode::Char('.'))), Some(InputKey::Char('.')));
    }

    #[test]
    fn test_ctrl_chars() {
        for c in ['c', 's', 'u'] {
            let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(key_event_to_input(event), Some(InputKey::CharCtrl(c)));
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Up)), Some(InputKey::Up));
        assert_eq!(key_event_to_input(key(KeyCode::Down)), Some(InputKey::Down));
        assert_eq!(key_event_to_input(key(KeyCode::Left)), Some(InputKey::Left));
        assert_eq!(key_event_to_input(key(KeyCode::Right)), Some(InputKey::Right));
        assert_eq!(key_event_to_input(key(KeyCode::Home)), Some(InputKey::Home));
        assert_eq!(key_event_to_input(key(KeyCode::End)), Some(InputKey::End));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_event_to_input(key(KeyCode::Enter)), Some(InputKey::Enter));
        assert_eq!(key_event_to_input(key(KeyCode::Esc)), Some(InputKey::Esc));
        assert_eq!(key_event_to_input(key(KeyCode::Backspace)), Some(InputKey::Backspace));
        assert_eq!(key_event_to_input(key(KeyCode::Delete)), Some(InputKey::Delete));
    }

    #[test]
    fn test_backtab_variants() {
        let shift_tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(shift_tab), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::BackTab)), Some(InputKey::BackTab));
        assert_eq!(key_event_to_input(key(KeyCode::Tab)), Some(InputKey::Tab));
    }

    #[test]
    fn test_shifted_symbol_is_plain_char() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(plus), Some(InputKey::Char('+')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        assert_eq!(key_event_to_input(key(KeyCode::Insert)), None);
        assert_eq!(key_event_to_input(key(KeyCode::F(1))), None);
    }
}
