//! Tests for handler module

use std::path::{Path, PathBuf};

use super::update::move_cursor;
use super::*;
use crate::calculation::CalculationState;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::{GridMove, Message};
use crate::state::{AppPhase, AppState, Panel};
use sustrack_calc::test_utils::driving_sample;
use sustrack_core::{ActivityField, AssetCatalog, TopicRegistry};

fn test_state() -> AppState {
    AppState::with_parts(
        PathBuf::from("."),
        Settings::default(),
        TopicRegistry::builtin(Path::new("images")),
        AssetCatalog::default(),
    )
}

/// Run a key through handle_key and update, following up like process_message
fn press(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    let mut msg = Some(Message::Key(key));
    let mut action = None;
    while let Some(m) = msg {
        let result = update(state, m);
        msg = result.message;
        if result.action.is_some() {
            action = result.action;
        }
    }
    action
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_quits_from_topic_browser() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_from_form() {
    let mut state = test_state();
    state.focus = Panel::Form;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_is_not_quit_in_form() {
    let mut state = test_state();
    state.focus = Panel::Form;
    assert!(handle_key(&state, InputKey::Char('q')).is_none());
}

#[test]
fn test_tab_toggles_panel() {
    let mut state = test_state();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Panel::Form);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, Panel::Topics);
}

#[test]
fn test_esc_in_form_returns_to_topics() {
    let mut state = test_state();
    state.focus = Panel::Form;
    press(&mut state, InputKey::Esc);
    assert_eq!(state.focus, Panel::Topics);
    assert!(!state.should_quit());
}

#[test]
fn test_tick_advances_counter() {
    let mut state = test_state();
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.tick_count, 2);
}

// ─────────────────────────────────────────────────────────
// Topic Browsing
// ─────────────────────────────────────────────────────────

#[test]
fn test_grid_cursor_two_columns() {
    // 0 1
    // 2 3
    assert_eq!(move_cursor(0, GridMove::Right, 4, 2), 1);
    assert_eq!(move_cursor(1, GridMove::Right, 4, 2), 1);
    assert_eq!(move_cursor(1, GridMove::Down, 4, 2), 3);
    assert_eq!(move_cursor(3, GridMove::Down, 4, 2), 3);
    assert_eq!(move_cursor(3, GridMove::Left, 4, 2), 2);
    assert_eq!(move_cursor(2, GridMove::Left, 4, 2), 2);
    assert_eq!(move_cursor(2, GridMove::Up, 4, 2), 0);
    assert_eq!(move_cursor(0, GridMove::Up, 4, 2), 0);
    assert_eq!(move_cursor(0, GridMove::Last, 4, 2), 3);
    assert_eq!(move_cursor(3, GridMove::First, 4, 2), 0);
}

#[test]
fn test_grid_cursor_ragged_last_row() {
    // 0 1 2
    // 3
    assert_eq!(move_cursor(1, GridMove::Down, 4, 3), 1);
    assert_eq!(move_cursor(0, GridMove::Down, 4, 3), 3);
    assert_eq!(move_cursor(3, GridMove::Right, 4, 3), 3);
}

#[test]
fn test_grid_cursor_empty_registry() {
    assert_eq!(move_cursor(5, GridMove::Down, 0, 2), 0);
}

#[test]
fn test_arrow_keys_move_cursor() {
    let mut state = test_state();
    press(&mut state, InputKey::Right);
    assert_eq!(state.highlighted_topic().unwrap().name, "Water Usage");
    press(&mut state, InputKey::Char('j'));
    assert_eq!(state.highlighted_topic().unwrap().name, "Waste Management");
    press(&mut state, InputKey::Char('h'));
    assert_eq!(state.highlighted_topic().unwrap().name, "Energy Saving");
}

#[test]
fn test_enter_opens_highlighted_topic() {
    let mut state = test_state();
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);
    assert_eq!(state.view_state.get(), Some("Energy Saving"));
}

#[test]
fn test_select_then_back_returns_to_browser() {
    let mut state = test_state();
    for name in ["Carbon Footprint", "Water Usage", "Energy Saving", "Waste Management"] {
        update(
            &mut state,
            Message::SelectTopic {
                name: name.to_string(),
            },
        );
        assert_eq!(state.view_state.get(), Some(name));
        assert_eq!(state.selected_topic().unwrap().name, name);

        press(&mut state, InputKey::Esc);
        assert_eq!(state.view_state.get(), None);
    }
}

#[test]
fn test_back_keys_in_detail_view() {
    for key in [
        InputKey::Esc,
        InputKey::Backspace,
        InputKey::Left,
        InputKey::Char('b'),
    ] {
        let mut state = test_state();
        update(
            &mut state,
            Message::SelectTopic {
                name: "Water Usage".to_string(),
            },
        );
        press(&mut state, key);
        assert!(!state.view_state.is_detail(), "{:?} should go back", key);
        assert!(!state.should_quit());
    }
}

#[test]
fn test_select_unknown_topic_is_ignored() {
    let mut state = test_state();
    update(
        &mut state,
        Message::SelectTopic {
            name: "Water Usage".to_string(),
        },
    );
    let result = update(
        &mut state,
        Message::SelectTopic {
            name: "Noise".to_string(),
        },
    );
    assert!(result.action.is_none());
    assert_eq!(state.view_state.get(), Some("Water Usage"));
}

#[test]
fn test_select_same_topic_twice_is_stable() {
    let mut state = test_state();
    let select = || Message::SelectTopic {
        name: "Waste Management".to_string(),
    };
    update(&mut state, select());
    let (view, cursor) = (state.view_state.clone(), state.topic_cursor);
    update(&mut state, select());
    assert_eq!(state.view_state, view);
    assert_eq!(state.topic_cursor, cursor);
}

#[test]
fn test_select_moves_cursor_to_topic() {
    let mut state = test_state();
    update(
        &mut state,
        Message::SelectTopic {
            name: "Waste Management".to_string(),
        },
    );
    assert_eq!(state.topic_cursor, 3);
}

// ─────────────────────────────────────────────────────────
// Activity Form
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_default_form_yields_all_zero() {
    let mut state = test_state();
    let result = update(&mut state, Message::SubmitForm);

    match result.action {
        Some(UpdateAction::SubmitCalculation { input }) => assert!(input.is_zero()),
        other => panic!("expected SubmitCalculation, got {:?}", other),
    }
    assert!(state.calculation.is_pending());
}

#[test]
fn test_minus_key_steps_down_and_clamps() {
    let mut state = test_state();
    state.focus = Panel::Form;
    for _ in 0..6 {
        press(&mut state, InputKey::Char('-'));
        press(&mut state, InputKey::Char('-'));
        assert_eq!(state.form.focused().value(), 0.0);
        press(&mut state, InputKey::Down);
    }
    assert!(state.form.to_input().is_zero());
}

#[test]
fn test_typing_into_form_and_submitting() {
    let mut state = test_state();
    state.focus = Panel::Form;
    for c in "12.5".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Char('+'));
    press(&mut state, InputKey::Char('+'));

    let action = press(&mut state, InputKey::Enter);
    match action {
        Some(UpdateAction::SubmitCalculation { input }) => {
            assert_eq!(input.km_driven, 12.5);
            assert_eq!(input.meat_meals, 2);
            assert_eq!(input.electricity_kwh, 0.0);
        }
        other => panic!("expected SubmitCalculation, got {:?}", other),
    }
}

#[test]
fn test_ctrl_s_submits() {
    let mut state = test_state();
    state.focus = Panel::Form;
    assert!(matches!(
        press(&mut state, InputKey::CharCtrl('s')),
        Some(UpdateAction::SubmitCalculation { .. })
    ));
}

#[test]
fn test_clear_and_backspace() {
    let mut state = test_state();
    state.focus = Panel::Form;
    for c in "345".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Backspace);
    assert_eq!(state.form.focused().buffer(), "34");
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.form.focused().buffer(), "");
}

#[test]
fn test_editing_never_submits() {
    let mut state = test_state();
    state.focus = Panel::Form;
    for key in [
        InputKey::Char('7'),
        InputKey::Char('+'),
        InputKey::Down,
        InputKey::Backspace,
        InputKey::Delete,
    ] {
        assert!(press(&mut state, key).is_none());
    }
    assert!(matches!(state.calculation, CalculationState::Idle));
}

// ─────────────────────────────────────────────────────────
// Calculation Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_submit_while_pending_is_ignored() {
    let mut state = test_state();
    assert!(update(&mut state, Message::SubmitForm).action.is_some());

    state
        .form
        .field_mut(ActivityField::WasteKg)
        .unwrap()
        .push('4');
    let second = update(&mut state, Message::SubmitForm);
    assert!(second.action.is_none());
    assert!(state.calculation.input().unwrap().is_zero());
}

#[test]
fn test_completed_calculation_is_stored() {
    let mut state = test_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::CalculationCompleted {
            result: driving_sample(),
        },
    );
    let result = state.calculation.result().unwrap();
    assert_eq!(result.emission("driving"), Some(12.5));
    assert!(!state.calculation.is_pending());
}

#[test]
fn test_failure_replaces_result() {
    let mut state = test_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::CalculationCompleted {
            result: driving_sample(),
        },
    );
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::CalculationFailed {
            error: "connection refused".to_string(),
        },
    );
    assert!(state.calculation.result().is_none());
    assert_eq!(state.calculation.error(), Some("connection refused"));
}

#[test]
fn test_resubmit_after_completion_allowed() {
    let mut state = test_state();
    update(&mut state, Message::SubmitForm);
    update(
        &mut state,
        Message::CalculationFailed {
            error: "timeout".to_string(),
        },
    );
    assert!(update(&mut state, Message::SubmitForm).action.is_some());
}

#[test]
fn test_stray_completion_is_dropped() {
    let mut state = test_state();
    update(
        &mut state,
        Message::CalculationCompleted {
            result: driving_sample(),
        },
    );
    assert!(matches!(state.calculation, CalculationState::Idle));
}
