//! Key event handlers for each focused panel

use crate::input_key::InputKey;
use crate::message::{GridMove, Message};
use crate::state::{AppState, Panel};

/// Convert key events to messages based on the focused panel
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that behave the same everywhere
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab | InputKey::BackTab => return Some(Message::FocusNextPanel),
        _ => {}
    }

    match state.focus {
        Panel::Topics if state.view_state.is_detail() => handle_key_topic_detail(key),
        Panel::Topics => handle_key_topic_browser(state, key),
        Panel::Form => handle_key_form(key),
    }
}

/// Handle key events in the topic grid
fn handle_key_topic_browser(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::MoveTopicCursor(GridMove::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveTopicCursor(GridMove::Down)),
        InputKey::Left | InputKey::Char('h') => Some(Message::MoveTopicCursor(GridMove::Left)),
        InputKey::Right | InputKey::Char('l') => Some(Message::MoveTopicCursor(GridMove::Right)),
        InputKey::Home => Some(Message::MoveTopicCursor(GridMove::First)),
        InputKey::End => Some(Message::MoveTopicCursor(GridMove::Last)),

        InputKey::Enter | InputKey::Char(' ') => {
            state
                .highlighted_topic()
                .map(|topic| Message::SelectTopic {
                    name: topic.name.clone(),
                })
        }

        _ => None,
    }
}

/// Handle key events while a topic is open
fn handle_key_topic_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('b') => {
            Some(Message::BackToTopics)
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the activity form.
/// Printable keys are text entry here, so `q` does not quit.
fn handle_key_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::FocusNextPanel),

        InputKey::Up => Some(Message::FocusPreviousField),
        InputKey::Down => Some(Message::FocusNextField),
        InputKey::Home => Some(Message::FocusFirstField),
        InputKey::End => Some(Message::FocusLastField),

        InputKey::Char(c @ ('0'..='9' | '.')) => Some(Message::FormInput(c)),
        InputKey::Char('+') | InputKey::Right => Some(Message::FormStep { up: true }),
        InputKey::Char('-') | InputKey::Left => Some(Message::FormStep { up: false }),

        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Delete | InputKey::CharCtrl('u') => Some(Message::FormClearField),

        InputKey::Enter | InputKey::CharCtrl('s') => Some(Message::SubmitForm),

        _ => None,
    }
}
