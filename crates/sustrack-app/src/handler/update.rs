//! Main update function - handles state transitions (TEA pattern)

use crate::message::{GridMove, Message};
use crate::state::{AppPhase, AppState, Panel};
use sustrack_core::prelude::*;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        Message::FocusNextPanel => {
            state.focus = match state.focus {
                Panel::Topics => Panel::Form,
                Panel::Form => Panel::Topics,
            };
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Topic Browsing
        // ─────────────────────────────────────────────────────────
        Message::MoveTopicCursor(movement) => {
            state.topic_cursor = move_cursor(
                state.topic_cursor,
                movement,
                state.registry.len(),
                state.topic_columns(),
            );
            UpdateResult::none()
        }

        Message::SelectTopic { name } => {
            match state.view_state.select(&state.registry, &name) {
                Ok(()) => {
                    if let Some(index) = state.registry.position(&name) {
                        state.topic_cursor = index;
                    }
                    debug!("Opened topic detail: {}", name);
                }
                Err(e) => warn!("Ignoring topic selection: {}", e),
            }
            UpdateResult::none()
        }

        Message::BackToTopics => {
            state.view_state.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Activity Form
        // ─────────────────────────────────────────────────────────
        Message::FocusNextField => {
            state.form.focus_next();
            UpdateResult::none()
        }
        Message::FocusPreviousField => {
            state.form.focus_previous();
            UpdateResult::none()
        }
        Message::FocusFirstField => {
            state.form.focus_first();
            UpdateResult::none()
        }
        Message::FocusLastField => {
            state.form.focus_last();
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            let field = state.form.focused_mut();
            if !field.push(c) {
                trace!("Rejected {:?} for {}", c, field.field().key());
            }
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.form.focused_mut().pop();
            UpdateResult::none()
        }

        Message::FormClearField => {
            state.form.focused_mut().clear();
            UpdateResult::none()
        }

        Message::FormStep { up } => {
            state
                .form
                .focused_mut()
                .step(if up { 1.0 } else { -1.0 });
            UpdateResult::none()
        }

        Message::SubmitForm => {
            let input = state.form.to_input();
            if !state.calculation.start(input) {
                debug!("Calculation already in flight, ignoring submit");
                return UpdateResult::none();
            }
            info!("Submitting activity record: {:?}", input);
            UpdateResult::action(UpdateAction::SubmitCalculation { input })
        }

        // ─────────────────────────────────────────────────────────
        // Calculation Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::CalculationCompleted { result } => {
            let total = result.total_carbon;
            if state.calculation.complete(result) {
                info!("Calculation completed: total {} kg CO2", total);
            } else {
                warn!("Dropping calculation result with no pending request");
            }
            UpdateResult::none()
        }

        Message::CalculationFailed { error } => {
            warn!("Calculation failed: {}", error);
            if !state.calculation.fail(error) {
                warn!("Dropping calculation failure with no pending request");
            }
            UpdateResult::none()
        }
    }
}

/// New cursor position inside a row-major grid of `len` cards.
/// Moves that would leave the grid keep the cursor where it is.
pub(crate) fn move_cursor(cursor: usize, movement: GridMove, len: usize, columns: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let columns = columns.max(1);
    let cursor = cursor.min(len - 1);
    match movement {
        GridMove::Up => cursor.checked_sub(columns).unwrap_or(cursor),
        GridMove::Down if cursor + columns < len => cursor + columns,
        GridMove::Down => cursor,
        GridMove::Left if cursor % columns > 0 => cursor - 1,
        GridMove::Left => cursor,
        GridMove::Right if cursor % columns + 1 < columns && cursor + 1 < len => cursor + 1,
        GridMove::Right => cursor,
        GridMove::First => 0,
        GridMove::Last => len - 1,
    }
}
