//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use sustrack_core::EmissionsResult;

/// Cursor movement inside the topic grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
    First,
    Last,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Move keyboard focus between the topic panel and the form
    FocusNextPanel,

    // ─────────────────────────────────────────────────────────
    // Topic Browsing
    // ─────────────────────────────────────────────────────────
    /// Move the highlighted card in the grid
    MoveTopicCursor(GridMove),
    /// Open a topic in the detail view
    SelectTopic { name: String },
    /// Leave the detail view
    BackToTopics,

    // ─────────────────────────────────────────────────────────
    // Activity Form
    // ─────────────────────────────────────────────────────────
    FocusNextField,
    FocusPreviousField,
    FocusFirstField,
    FocusLastField,
    /// Type a character into the focused field
    FormInput(char),
    FormBackspace,
    FormClearField,
    /// Step the focused field up or down by one, clamped at zero
    FormStep { up: bool },
    /// Explicit submit ("Calculate Carbon Footprint")
    SubmitForm,

    // ─────────────────────────────────────────────────────────
    // Calculation Lifecycle
    // ─────────────────────────────────────────────────────────
    CalculationCompleted { result: EmissionsResult },
    CalculationFailed { error: String },
}
