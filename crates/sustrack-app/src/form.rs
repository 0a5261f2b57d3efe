//! Activity form state
//!
//! Six numeric text buffers that can never hold a negative value: `-` is
//! not an accepted character, stepping clamps at zero, and the meal count
//! rejects the decimal point. Editing never submits anything; the handler
//! turns an explicit submit into an [`ActivityInput`].

use sustrack_core::{format_amount, ActivityField, ActivityInput};

/// Longest accepted buffer, digits and point included
pub const MAX_INPUT_LEN: usize = 12;

/// Text buffer behind one numeric input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    field: ActivityField,
    buffer: String,
}

impl FieldInput {
    pub fn new(field: ActivityField) -> Self {
        Self {
            field,
            buffer: String::new(),
        }
    }

    pub fn field(&self) -> ActivityField {
        self.field
    }

    /// Raw text as typed; empty means zero
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current numeric value (empty or a lone `.` parse as zero)
    pub fn value(&self) -> f64 {
        self.buffer.parse::<f64>().unwrap_or(0.0).max(0.0)
    }

    /// Text shown in the widget: the buffer, or the zero default when empty
    pub fn display(&self) -> String {
        if self.buffer.is_empty() {
            if self.field.is_integer() {
                "0".to_string()
            } else {
                "0.00".to_string()
            }
        } else {
            self.buffer.clone()
        }
    }

    /// Try to append a character. Returns whether it was accepted.
    pub fn push(&mut self, c: char) -> bool {
        if self.buffer.len() >= MAX_INPUT_LEN {
            return false;
        }
        match c {
            '0'..='9' => {
                // "0" followed by a digit replaces the leading zero
                let mut next = if self.buffer == "0" {
                    String::new()
                } else {
                    self.buffer.clone()
                };
                next.push(c);
                // The meal count must stay representable as submitted
                if self.field.is_integer() && next.parse::<u32>().is_err() {
                    return false;
                }
                self.buffer = next;
                true
            }
            '.' if !self.field.is_integer() && !self.buffer.contains('.') => {
                if self.buffer.is_empty() {
                    self.buffer.push('0');
                }
                self.buffer.push('.');
                true
            }
            _ => false,
        }
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Add `delta` to the value, clamping at zero.
    ///
    /// A step whose result would not fit the input (too many characters, or
    /// past `u32::MAX` for the meal count) leaves the buffer unchanged.
    /// Returns whether the value changed.
    pub fn step(&mut self, delta: f64) -> bool {
        let next = (self.value() + delta).max(0.0);
        let text = if self.field.is_integer() {
            let whole = next.trunc();
            if whole > f64::from(u32::MAX) {
                return false;
            }
            format!("{}", whole as u32)
        } else {
            format_amount(next)
        };
        if text.len() > MAX_INPUT_LEN {
            return false;
        }
        let changed = text != self.buffer;
        self.buffer = text;
        changed
    }
}

/// All six inputs plus the focused index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityFormState {
    fields: Vec<FieldInput>,
    focused: usize,
}

impl Default for ActivityFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityFormState {
    pub fn new() -> Self {
        Self {
            fields: ActivityField::ALL.iter().copied().map(FieldInput::new).collect(),
            focused: 0,
        }
    }

    pub fn fields(&self) -> &[FieldInput] {
        &self.fields
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused(&self) -> &FieldInput {
        &self.fields[self.focused]
    }

    pub fn focused_mut(&mut self) -> &mut FieldInput {
        &mut self.fields[self.focused]
    }

    pub fn field(&self, field: ActivityField) -> Option<&FieldInput> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn field_mut(&mut self, field: ActivityField) -> Option<&mut FieldInput> {
        self.fields.iter_mut().find(|f| f.field == field)
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    pub fn focus_first(&mut self) {
        self.focused = 0;
    }

    pub fn focus_last(&mut self) {
        self.focused = self.fields.len() - 1;
    }

    /// Snapshot the buffers as a submission record
    pub fn to_input(&self) -> ActivityInput {
        let mut input = ActivityInput::default();
        for field in &self.fields {
            input.set(field.field, field.value());
        }
        input
    }
}
